//! Pagination extractor
//!
//! Extracts cursor-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use gourmet_core::{PageQuery, Snowflake};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Get items after this ID
    #[serde(default)]
    pub after: Option<String>,
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated pagination parameters, limit clamped to 1-100
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination(pub PageQuery);

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        // Parse after cursor
        let after = params
            .after
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'after' cursor format"))
            })
            .transpose()?;

        Ok(Pagination(PageQuery::new(after, params.limit)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
