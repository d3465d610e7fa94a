//! Post handlers
//!
//! Reviews are multipart forms with a menu item photo and a 3D model. The
//! `post_list` and `post_detail` routes expose the same data without a token.

use axum::{extract::State, Json};
use gourmet_core::Snowflake;
use gourmet_service::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};
use gourmet_service::PostService;

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedForm};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List posts
///
/// GET /api/post/
pub async fn list_posts(
    State(state): State<AppState>,
    _auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<Vec<PostResponse>>> {
    list_public_posts(State(state), pagination).await
}

/// Create a post authored by the caller
///
/// POST /api/post/
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedForm(request): ValidatedForm<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let response = service.create(auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// Get post by ID
///
/// GET /api/post/{id}/
pub async fn get_post(
    State(state): State<AppState>,
    _auth: AuthUser,
    path: IdPath,
) -> ApiResult<Json<PostResponse>> {
    get_public_post(State(state), path).await
}

/// Replace a post. Files and categories may still be omitted.
///
/// PUT /api/post/{id}/
pub async fn replace_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedForm(request): ValidatedForm<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    request.ensure_complete().map_err(ApiError::from)?;
    update(&state, &auth, post_id, request).await
}

/// Partially update a post
///
/// PATCH /api/post/{id}/
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
    ValidatedForm(request): ValidatedForm<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    update(&state, &auth, post_id, request).await
}

async fn update(
    state: &AppState,
    auth: &AuthUser,
    post_id: Snowflake,
    request: UpdatePostRequest,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let response = service.update(auth.actor(), post_id, request).await?;
    Ok(Json(response))
}

/// Delete a post and its media
///
/// DELETE /api/post/{id}/
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(post_id): IdPath,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete(auth.actor(), post_id).await?;
    Ok(NoContent)
}

/// GET /api/post_list/
pub async fn list_public_posts(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    Ok(Json(service.list(page).await?))
}

/// GET /api/post_detail/{id}/
pub async fn get_public_post(
    State(state): State<AppState>,
    IdPath(post_id): IdPath,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    Ok(Json(service.get(post_id).await?))
}
