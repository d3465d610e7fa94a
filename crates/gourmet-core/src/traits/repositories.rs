//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Category, Post, Profile, Restaurant, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Cursor pagination for list queries, ordered by ascending id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Only return rows with an id greater than this one
    pub after: Option<Snowflake>,
    pub limit: i64,
}

impl PageQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Build a query, clamping the limit to `1..=100`
    pub fn new(after: Option<Snowflake>, limit: Option<i64>) -> Self {
        Self {
            after,
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by normalized email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// Stamp a successful login
    async fn update_last_login(&self, id: Snowflake, at: DateTime<Utc>) -> RepoResult<()>;

    /// Hard delete a user; profiles and posts cascade
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Profile>>;

    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Option<Profile>>;

    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Profile>>;

    /// Create a profile; a second profile for the same user is a conflict
    async fn create(&self, profile: &Profile) -> RepoResult<()>;

    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID, including its category links
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Post>>;

    /// Insert the post and its category links atomically
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update the post and replace its category links atomically
    async fn update(&self, post: &Post) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Restaurant Repository
// ============================================================================

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Restaurant>>;

    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Restaurant>>;

    async fn create(&self, restaurant: &Restaurant) -> RepoResult<()>;

    async fn update(&self, restaurant: &Restaurant) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Category Repository
// ============================================================================

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Category>>;

    async fn list(&self, page: PageQuery) -> RepoResult<Vec<Category>>;

    /// Return the ids from `ids` that do not exist
    async fn find_missing(&self, ids: &[Snowflake]) -> RepoResult<Vec<Snowflake>>;

    async fn create(&self, category: &Category) -> RepoResult<()>;

    async fn update(&self, category: &Category) -> RepoResult<()>;

    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
