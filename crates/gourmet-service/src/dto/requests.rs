//! Request DTOs for API endpoints
//!
//! JSON requests implement `Deserialize` and `Validate`. Multipart requests are
//! assembled by the API layer from form fields and only implement `Validate`.

use gourmet_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

use super::upload::UploadedFile;
use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Account & Token Requests
// ============================================================================

/// User registration request
///
/// Email presence and format are checked when the user entity is built, so an
/// empty address reports `EMAIL_REQUIRED` rather than a generic validation error.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Obtain a token pair with email and password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenObtainRequest {
    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub email: String,

    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub password: String,
}

/// Exchange a refresh token for a new access token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRefreshRequest {
    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub refresh: String,
}

/// Check that a token is valid
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenVerifyRequest {
    #[validate(length(min = 1, message = "This field may not be blank"))]
    pub token: String,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Create profile request (multipart)
#[derive(Debug, Clone, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 20, message = "nickName must be 1-20 characters"))]
    pub nick_name: String,

    pub img: Option<UploadedFile>,
}

/// Update profile request (multipart). PUT requires `nick_name`, PATCH does not.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 20, message = "nickName must be 1-20 characters"))]
    pub nick_name: Option<String>,

    /// Replaces the current avatar. Omitted keeps it.
    pub img: Option<UploadedFile>,
}

impl UpdateProfileRequest {
    /// Reject a full replacement that leaves out required fields
    pub fn ensure_complete(&self) -> ServiceResult<()> {
        if self.nick_name.is_none() {
            return Err(required("nickName"));
        }
        Ok(())
    }
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request (multipart)
#[derive(Debug, Clone, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 100, message = "restaurant_name must be 1-100 characters"))]
    pub restaurant_name: String,

    #[validate(length(min = 1, max = 100, message = "location must be 1-100 characters"))]
    pub location: String,

    #[validate(length(min = 1, max = 100, message = "menu_item must be 1-100 characters"))]
    pub menu_item: String,

    pub menu_item_photo: UploadedFile,

    pub menu_item_model: UploadedFile,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i32,

    /// Checked against the 1-5 range when the `Score` is built
    pub score: i16,

    #[validate(length(min = 1, message = "review_text may not be blank"))]
    pub review_text: String,

    pub category: Vec<Snowflake>,
}

/// Update post request (multipart). Omitted fields keep their current value.
#[derive(Debug, Clone, Default, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 100, message = "restaurant_name must be 1-100 characters"))]
    pub restaurant_name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "location must be 1-100 characters"))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 100, message = "menu_item must be 1-100 characters"))]
    pub menu_item: Option<String>,

    pub menu_item_photo: Option<UploadedFile>,

    pub menu_item_model: Option<UploadedFile>,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: Option<i32>,

    pub score: Option<i16>,

    #[validate(length(min = 1, message = "review_text may not be blank"))]
    pub review_text: Option<String>,

    /// Replaces every category link when present
    pub category: Option<Vec<Snowflake>>,
}

impl UpdatePostRequest {
    /// Reject a full replacement that leaves out a text or number field
    ///
    /// Files and categories stay optional on PUT.
    pub fn ensure_complete(&self) -> ServiceResult<()> {
        let missing = [
            ("restaurant_name", self.restaurant_name.is_none()),
            ("location", self.location.is_none()),
            ("menu_item", self.menu_item.is_none()),
            ("price", self.price.is_none()),
            ("score", self.score.is_none()),
            ("review_text", self.review_text.is_none()),
        ];

        match missing.iter().find(|(_, absent)| *absent) {
            Some((field, _)) => Err(required(field)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Restaurant & Category Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "location must be 1-100 characters"))]
    pub location: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRestaurantRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 100, message = "location must be 1-100 characters"))]
    pub location: Option<String>,
}

impl From<CreateRestaurantRequest> for UpdateRestaurantRequest {
    fn from(request: CreateRestaurantRequest) -> Self {
        Self {
            name: Some(request.name),
            location: Some(request.location),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: Option<String>,
}

impl From<CreateCategoryRequest> for UpdateCategoryRequest {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: Some(request.name),
        }
    }
}

fn required(field: &str) -> ServiceError {
    ServiceError::validation(format!("{field}: This field is required."))
}
