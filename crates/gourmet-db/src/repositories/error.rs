//! Error handling utilities for repositories

use gourmet_core::error::DomainError;
use gourmet_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

pub fn profile_not_found(id: Snowflake) -> DomainError {
    DomainError::ProfileNotFound(id)
}

pub fn post_not_found(id: Snowflake) -> DomainError {
    DomainError::PostNotFound(id)
}

pub fn restaurant_not_found(id: Snowflake) -> DomainError {
    DomainError::RestaurantNotFound(id)
}

pub fn category_not_found(id: Snowflake) -> DomainError {
    DomainError::CategoryNotFound(id)
}
