//! Profile handlers
//!
//! Profiles are submitted as multipart forms carrying an optional avatar.

use axum::{extract::State, Json};
use gourmet_core::Snowflake;
use gourmet_service::dto::{CreateProfileRequest, ProfileResponse, UpdateProfileRequest};
use gourmet_service::ProfileService;

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedForm};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List profiles
///
/// GET /api/profile/
pub async fn list_profiles(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.list(page).await?))
}

/// Create a profile for the caller
///
/// POST /api/profile/
pub async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedForm(request): ValidatedForm<CreateProfileRequest>,
) -> ApiResult<Created<Json<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let response = service.create(auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get profile by ID
///
/// GET /api/profile/{id}/
pub async fn get_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(profile_id): IdPath,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.get(profile_id).await?))
}

/// Replace a profile
///
/// PUT /api/profile/{id}/
pub async fn replace_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(profile_id): IdPath,
    ValidatedForm(request): ValidatedForm<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    request.ensure_complete().map_err(ApiError::from)?;
    update(&state, &auth, profile_id, request).await
}

/// Partially update a profile
///
/// PATCH /api/profile/{id}/
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(profile_id): IdPath,
    ValidatedForm(request): ValidatedForm<UpdateProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    update(&state, &auth, profile_id, request).await
}

async fn update(
    state: &AppState,
    auth: &AuthUser,
    profile_id: Snowflake,
    request: UpdateProfileRequest,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update(auth.actor(), profile_id, request).await?;
    Ok(Json(response))
}

/// Delete a profile
///
/// DELETE /api/profile/{id}/
pub async fn delete_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(profile_id): IdPath,
) -> ApiResult<NoContent> {
    let service = ProfileService::new(state.service_context());
    service.delete(auth.actor(), profile_id).await?;
    Ok(NoContent)
}

/// List the caller's own profiles
///
/// GET /api/myprofile/
pub async fn my_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    Ok(Json(service.my_profiles(auth.actor()).await?))
}
