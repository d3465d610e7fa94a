//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Uploaded file parts and their type and size checks
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;
pub mod upload;

pub use mappers::{Presenter, DATE_FORMAT};
pub use requests::{
    CreateCategoryRequest, CreatePostRequest, CreateProfileRequest, CreateRestaurantRequest,
    RegisterRequest, TokenObtainRequest, TokenRefreshRequest, TokenVerifyRequest,
    UpdateCategoryRequest, UpdatePostRequest, UpdateProfileRequest, UpdateRestaurantRequest,
};
pub use responses::{
    CategoryResponse, HealthChecks, HealthResponse, PostResponse, ProfileResponse,
    ReadinessResponse, RegisterResponse, RestaurantResponse, TokenRefreshResponse,
    TokenVerifyResponse,
};
pub use upload::{MediaKind, UploadedFile};
