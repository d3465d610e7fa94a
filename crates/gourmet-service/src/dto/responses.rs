//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use gourmet_core::Snowflake;
use serde::Serialize;

// ============================================================================
// Account & Token Responses
// ============================================================================

/// Registered user. The password is never echoed.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub id: Snowflake,
    pub email: String,
}

/// Fresh access token from a refresh token
#[derive(Debug, Clone, Serialize)]
pub struct TokenRefreshResponse {
    pub access: String,
}

/// Successful token verification, serialized as `{}`
#[derive(Debug, Clone, Serialize)]
pub struct TokenVerifyResponse {}

// ============================================================================
// Profile & Post Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Snowflake,
    #[serde(rename = "nickName")]
    pub nick_name: String,
    /// Owning user id
    pub user: Snowflake,
    /// Local date in the configured time zone, `%Y-%m-%d`
    pub created_on: String,
    /// Public URL of the avatar
    pub img: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: Snowflake,
    pub author: Snowflake,
    pub restaurant_name: String,
    pub location: String,
    pub category: Vec<Snowflake>,
    pub menu_item: String,
    pub score: i16,
    pub score_label: String,
    pub price: i32,
    pub menu_item_photo: String,
    pub menu_item_model: String,
    pub review_text: String,
    pub created_on: String,
}

// ============================================================================
// Reference Data Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantResponse {
    pub id: Snowflake,
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: Snowflake,
    pub name: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, storage_healthy: bool) -> Self {
        let all_healthy = database_healthy && storage_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
