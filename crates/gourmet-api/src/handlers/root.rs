//! API root listing the browsable collections

use axum::Json;
use serde_json::{json, Value};

/// List collection endpoints
///
/// GET /api/
pub async fn api_root() -> Json<Value> {
    Json(json!({
        "profile": "/api/profile/",
        "post": "/api/post/",
        "restaurant": "/api/restaurant/",
        "category": "/api/category/",
    }))
}
