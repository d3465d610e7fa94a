//! PostgreSQL implementation of CategoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gourmet_core::entities::Category;
use gourmet_core::traits::{CategoryRepository, PageQuery, RepoResult};
use gourmet_core::value_objects::Snowflake;

use crate::models::CategoryModel;

use super::error::{category_not_found, map_db_error};

/// PostgreSQL implementation of CategoryRepository
#[derive(Clone)]
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>> {
        let result = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name FROM categories WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Category::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Category>> {
        let results = sqlx::query_as::<_, CategoryModel>(
            r"
            SELECT id, name
            FROM categories
            WHERE ($1::BIGINT IS NULL OR id > $1)
            ORDER BY id ASC
            LIMIT $2
            ",
        )
        .bind(page.after.map(Snowflake::into_inner))
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Category::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_missing(&self, ids: &[Snowflake]) -> RepoResult<Vec<Snowflake>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();
        let missing = sqlx::query_scalar::<_, i64>(
            r"
            SELECT t.id
            FROM UNNEST($1::BIGINT[]) AS t(id)
            WHERE NOT EXISTS (SELECT 1 FROM categories c WHERE c.id = t.id)
            ORDER BY t.id
            ",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(missing.into_iter().map(Snowflake::new).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, category: &Category) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO categories (id, name) VALUES ($1, $2)
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, category: &Category) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE categories SET name = $2 WHERE id = $1
            ",
        )
        .bind(category.id.into_inner())
        .bind(&category.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(category.id));
        }

        Ok(())
    }

    /// Deleting a category also drops its post links
    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM categories WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(category_not_found(id));
        }

        Ok(())
    }
}
