//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use gourmet_core::entities::Profile;
use gourmet_core::error::DomainError;
use gourmet_core::traits::{PageQuery, ProfileRepository, RepoResult};
use gourmet_core::value_objects::Snowflake;

use crate::models::ProfileModel;

use super::error::{map_db_error, profile_not_found, user_not_found};

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, nick_name, img, created_on
            FROM profiles
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, nick_name, img, created_on
            FROM profiles
            WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Profile>> {
        let results = sqlx::query_as::<_, ProfileModel>(
            r"
            SELECT id, user_id, nick_name, img, created_on
            FROM profiles
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

        Ok(results.into_iter().map(Profile::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, profile: &Profile) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (id, user_id, nick_name, img, created_on)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(profile.id.into_inner())
        .bind(profile.user_id.into_inner())
        .bind(&profile.nick_name)
        .bind(&profile.img)
        .bind(profile.created_on)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => DomainError::ProfileAlreadyExists,
            Some(db_err) if db_err.is_foreign_key_violation() => user_not_found(profile.user_id),
            _ => map_db_error(e),
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET nick_name = $2, img = $3
            WHERE id = $1
            ",
        )
        .bind(profile.id.into_inner())
        .bind(&profile.nick_name)
        .bind(&profile.img)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM profiles WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(id));
        }

        Ok(())
    }
}
