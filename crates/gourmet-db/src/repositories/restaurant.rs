//! PostgreSQL implementation of RestaurantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gourmet_core::entities::Restaurant;
use gourmet_core::traits::{PageQuery, RepoResult, RestaurantRepository};
use gourmet_core::value_objects::Snowflake;

use crate::models::RestaurantModel;

use super::error::{map_db_error, restaurant_not_found};

/// PostgreSQL implementation of RestaurantRepository
#[derive(Clone)]
pub struct PgRestaurantRepository {
    pool: PgPool,
}

impl PgRestaurantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Restaurant>> {
        let result = sqlx::query_as::<_, RestaurantModel>(
            r"
            SELECT id, name, location FROM restaurants WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Restaurant::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Restaurant>> {
        let results = sqlx::query_as::<_, RestaurantModel>(
            r"
            SELECT id, name, location
            FROM restaurants
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

        Ok(results.into_iter().map(Restaurant::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, restaurant: &Restaurant) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO restaurants (id, name, location) VALUES ($1, $2, $3)
            ",
        )
        .bind(restaurant.id.into_inner())
        .bind(&restaurant.name)
        .bind(&restaurant.location)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, restaurant: &Restaurant) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE restaurants SET name = $2, location = $3 WHERE id = $1
            ",
        )
        .bind(restaurant.id.into_inner())
        .bind(&restaurant.name)
        .bind(&restaurant.location)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(restaurant_not_found(restaurant.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM restaurants WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(restaurant_not_found(id));
        }

        Ok(())
    }
}
