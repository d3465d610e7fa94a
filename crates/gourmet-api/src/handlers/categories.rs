//! Category handlers

use axum::{extract::State, Json};
use gourmet_service::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use gourmet_service::CategoryService;

use crate::extractors::{IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/category/
pub async fn list_categories(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.list(page).await?))
}

/// POST /api/category/
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/category/{id}/
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.get(category_id).await?))
}

/// PUT /api/category/{id}/
pub async fn replace_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service.update(category_id, request.into()).await?;
    Ok(Json(response))
}

/// PATCH /api/category/{id}/
pub async fn update_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.service_context());
    let response = service.update(category_id, request).await?;
    Ok(Json(response))
}

/// Delete a category. Posts keep existing without the link.
///
/// DELETE /api/category/{id}/
pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(category_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.service_context());
    service.delete(category_id).await?;
    Ok(NoContent)
}
