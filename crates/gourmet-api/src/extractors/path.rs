//! Path parameter extractor
//!
//! Type-safe extraction of the Snowflake `:id` segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use gourmet_core::Snowflake;

use crate::response::ApiError;

/// The resource id in `/{collection}/:id/`
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        raw.parse()
            .map(IdPath)
            .map_err(|_| ApiError::invalid_path("Invalid id format"))
    }
}
