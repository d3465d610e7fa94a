//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Profile not found: {0}")]
    ProfileNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(Snowflake),

    #[error("Category not found: {0}")]
    CategoryNotFound(Snowflake),

    #[error("Media file not found: {0}")]
    MediaNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Users must have an email address")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Score must be between 1 and 5, got {0}")]
    InvalidScore(i16),

    #[error("Unknown category: {0}")]
    UnknownCategory(Snowflake),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("File too large: max {max_mb} MB")]
    FileTooLarge { max_mb: u32 },

    #[error("Invalid media path: {0}")]
    InvalidMediaPath(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the owner can modify this resource")]
    NotOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("User already has a profile")]
    ProfileAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::RestaurantNotFound(_) => "UNKNOWN_RESTAURANT",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::MediaNotFound(_) => "UNKNOWN_MEDIA",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmailRequired => "EMAIL_REQUIRED",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidScore(_) => "INVALID_SCORE",
            Self::UnknownCategory(_) => "INVALID_CATEGORY",
            Self::UnsupportedFileType(_) => "UNSUPPORTED_FILE_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::InvalidMediaPath(_) => "INVALID_MEDIA_PATH",

            // Authorization
            Self::NotOwner => "NOT_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::PostNotFound(_)
                | Self::RestaurantNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::MediaNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmailRequired
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::InvalidScore(_)
                | Self::UnknownCategory(_)
                | Self::UnsupportedFileType(_)
                | Self::FileTooLarge { .. }
                | Self::InvalidMediaPath(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::ProfileAlreadyExists)
    }
}
