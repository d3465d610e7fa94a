//! Responses for unrouted requests

use axum::http::{Method, Uri};
use gourmet_common::AppError;

use crate::response::ApiError;

/// No route matches the path
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(uri.path()).into()
}

/// The path exists but not for this method
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}
