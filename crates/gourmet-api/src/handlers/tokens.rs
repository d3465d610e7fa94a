//! JWT token handlers
//!
//! Obtain, refresh and verify the token pair used by the `JWT` authorization scheme.

use axum::{extract::State, Json};
use gourmet_common::TokenPair;
use gourmet_service::dto::{
    TokenObtainRequest, TokenRefreshRequest, TokenRefreshResponse, TokenVerifyRequest,
    TokenVerifyResponse,
};
use gourmet_service::TokenService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Exchange email and password for a token pair
///
/// POST /authen/jwt/create/
pub async fn create_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenObtainRequest>,
) -> ApiResult<Json<TokenPair>> {
    let service = TokenService::new(state.service_context());
    let pair = service.obtain(request).await?;
    Ok(Json(pair))
}

/// Issue a new access token
///
/// POST /authen/jwt/refresh/
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenRefreshRequest>,
) -> ApiResult<Json<TokenRefreshResponse>> {
    let service = TokenService::new(state.service_context());
    let response = service.refresh(request).await?;
    Ok(Json(response))
}

/// POST /authen/jwt/verify/
pub async fn verify_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<TokenVerifyRequest>,
) -> ApiResult<Json<TokenVerifyResponse>> {
    let service = TokenService::new(state.service_context());
    let response = service.verify(&request)?;
    Ok(Json(response))
}
