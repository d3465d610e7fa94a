//! PostgreSQL implementation of PostRepository
//!
//! A post and its `post_categories` links are always written in one transaction.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use gourmet_core::entities::Post;
use gourmet_core::error::DomainError;
use gourmet_core::traits::{PageQuery, PostRepository, RepoResult};
use gourmet_core::value_objects::Snowflake;

use crate::mappers::PostInsert;
use crate::models::PostModel;

use super::error::{map_db_error, map_foreign_key_violation, post_not_found, user_not_found};

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_category_links(
        tx: &mut Transaction<'_, Postgres>,
        post_id: i64,
        category_ids: &[i64],
    ) -> RepoResult<()> {
        if category_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r"
            INSERT INTO post_categories (post_id, category_id)
            SELECT $1, UNNEST($2::BIGINT[])
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(post_id)
        .bind(category_ids)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || {
                DomainError::ValidationError("One or more categories do not exist".to_string())
            })
        })?;

        Ok(())
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.author_id, p.restaurant_name, p.location, p.menu_item,
                   p.menu_item_photo, p.menu_item_model, p.price, p.score, p.review_text,
                   p.created_on,
                   ARRAY(
                       SELECT pc.category_id FROM post_categories pc
                       WHERE pc.post_id = p.id ORDER BY pc.category_id
                   ) AS category_ids
            FROM posts p
            WHERE p.id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Post::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Post>> {
        let results = sqlx::query_as::<_, PostModel>(
            r"
            SELECT p.id, p.author_id, p.restaurant_name, p.location, p.menu_item,
                   p.menu_item_photo, p.menu_item_model, p.price, p.score, p.review_text,
                   p.created_on,
                   ARRAY(
                       SELECT pc.category_id FROM post_categories pc
                       WHERE pc.post_id = p.id ORDER BY pc.category_id
                   ) AS category_ids
            FROM posts p
            WHERE ($1::BIGINT IS NULL OR p.id > $1)
            ORDER BY p.id ASC
            LIMIT $2
            ",
        )
        .bind(page.after.map(Snowflake::into_inner))
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Post::try_from).collect()
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &Post) -> RepoResult<()> {
        let insert = PostInsert::new(post);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO posts (id, author_id, restaurant_name, location, menu_item,
                               menu_item_photo, menu_item_model, price, score, review_text,
                               created_on)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(insert.id)
        .bind(insert.author_id)
        .bind(insert.restaurant_name)
        .bind(insert.location)
        .bind(insert.menu_item)
        .bind(insert.menu_item_photo)
        .bind(insert.menu_item_model)
        .bind(insert.price)
        .bind(insert.score)
        .bind(insert.review_text)
        .bind(post.created_on)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, || user_not_found(post.author_id)))?;

        Self::insert_category_links(&mut tx, insert.id, &insert.category_ids).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &Post) -> RepoResult<()> {
        let insert = PostInsert::new(post);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE posts
            SET restaurant_name = $2, location = $3, menu_item = $4, menu_item_photo = $5,
                menu_item_model = $6, price = $7, score = $8, review_text = $9
            WHERE id = $1
            ",
        )
        .bind(insert.id)
        .bind(insert.restaurant_name)
        .bind(insert.location)
        .bind(insert.menu_item)
        .bind(insert.menu_item_photo)
        .bind(insert.menu_item_model)
        .bind(insert.price)
        .bind(insert.score)
        .bind(insert.review_text)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(post.id));
        }

        sqlx::query("DELETE FROM post_categories WHERE post_id = $1")
            .bind(insert.id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        Self::insert_category_links(&mut tx, insert.id, &insert.category_ids).await?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM posts WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(post_not_found(id));
        }

        Ok(())
    }
}
