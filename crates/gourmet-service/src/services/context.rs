//! Service context - dependency container for services
//!
//! Holds the repositories, the media store and the shared helpers needed by services.

use std::sync::Arc;

use chrono_tz::Tz;
use gourmet_common::auth::JwtService;
use gourmet_core::traits::{
    CategoryRepository, MediaStore, PostRepository, ProfileRepository, RestaurantRepository,
    UserRepository,
};
use gourmet_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};
use crate::dto::Presenter;

/// Default upload limit when none is configured
const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The media store for uploaded images and 3D models
/// - JWT service for authentication
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    post_repo: Arc<dyn PostRepository>,
    restaurant_repo: Arc<dyn RestaurantRepository>,
    category_repo: Arc<dyn CategoryRepository>,

    // Media
    media_store: Arc<dyn MediaStore>,
    max_upload_bytes: usize,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    /// Time zone `created_on` dates are rendered in
    time_zone: Tz,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        post_repo: Arc<dyn PostRepository>,
        restaurant_repo: Arc<dyn RestaurantRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        media_store: Arc<dyn MediaStore>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
        time_zone: Tz,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            user_repo,
            profile_repo,
            post_repo,
            restaurant_repo,
            category_repo,
            media_store,
            max_upload_bytes,
            jwt_service,
            snowflake_generator,
            time_zone,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the restaurant repository
    pub fn restaurant_repo(&self) -> &dyn RestaurantRepository {
        self.restaurant_repo.as_ref()
    }

    /// Get the category repository
    pub fn category_repo(&self) -> &dyn CategoryRepository {
        self.category_repo.as_ref()
    }

    // === Media ===

    /// Get the media store
    pub fn media_store(&self) -> &dyn MediaStore {
        self.media_store.as_ref()
    }

    /// Maximum size of a single uploaded file in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Renderer for entities carrying media paths and timestamps
    pub fn presenter(&self) -> Presenter<'_> {
        Presenter::new(self.media_store.as_ref(), self.time_zone)
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("media_store", &"MediaStore")
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("time_zone", &self.time_zone)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    restaurant_repo: Option<Arc<dyn RestaurantRepository>>,
    category_repo: Option<Arc<dyn CategoryRepository>>,
    media_store: Option<Arc<dyn MediaStore>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    time_zone: Tz,
    max_upload_bytes: usize,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            user_repo: None,
            profile_repo: None,
            post_repo: None,
            restaurant_repo: None,
            category_repo: None,
            media_store: None,
            jwt_service: None,
            snowflake_generator: None,
            time_zone: chrono_tz::Asia::Tokyo,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn restaurant_repo(mut self, repo: Arc<dyn RestaurantRepository>) -> Self {
        self.restaurant_repo = Some(repo);
        self
    }

    pub fn category_repo(mut self, repo: Arc<dyn CategoryRepository>) -> Self {
        self.category_repo = Some(repo);
        self
    }

    pub fn media_store(mut self, store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.profile_repo.ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.post_repo.ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.restaurant_repo.ok_or_else(|| ServiceError::validation("restaurant_repo is required"))?,
            self.category_repo.ok_or_else(|| ServiceError::validation("category_repo is required"))?,
            self.media_store.ok_or_else(|| ServiceError::validation("media_store is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            self.time_zone,
            self.max_upload_bytes,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
