//! Restaurant handlers
//!
//! Plain JSON CRUD, open to anonymous callers.

use axum::{extract::State, Json};
use gourmet_service::dto::{CreateRestaurantRequest, RestaurantResponse, UpdateRestaurantRequest};
use gourmet_service::RestaurantService;

use crate::extractors::{IdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/restaurant/
pub async fn list_restaurants(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<Vec<RestaurantResponse>>> {
    let service = RestaurantService::new(state.service_context());
    Ok(Json(service.list(page).await?))
}

/// POST /api/restaurant/
pub async fn create_restaurant(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateRestaurantRequest>,
) -> ApiResult<Created<Json<RestaurantResponse>>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/restaurant/{id}/
pub async fn get_restaurant(
    State(state): State<AppState>,
    IdPath(restaurant_id): IdPath,
) -> ApiResult<Json<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    Ok(Json(service.get(restaurant_id).await?))
}

/// Replace a restaurant, both fields required
///
/// PUT /api/restaurant/{id}/
pub async fn replace_restaurant(
    State(state): State<AppState>,
    IdPath(restaurant_id): IdPath,
    ValidatedJson(request): ValidatedJson<CreateRestaurantRequest>,
) -> ApiResult<Json<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.update(restaurant_id, request.into()).await?;
    Ok(Json(response))
}

/// PATCH /api/restaurant/{id}/
pub async fn update_restaurant(
    State(state): State<AppState>,
    IdPath(restaurant_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateRestaurantRequest>,
) -> ApiResult<Json<RestaurantResponse>> {
    let service = RestaurantService::new(state.service_context());
    let response = service.update(restaurant_id, request).await?;
    Ok(Json(response))
}

/// DELETE /api/restaurant/{id}/
pub async fn delete_restaurant(
    State(state): State<AppState>,
    IdPath(restaurant_id): IdPath,
) -> ApiResult<NoContent> {
    let service = RestaurantService::new(state.service_context());
    service.delete(restaurant_id).await?;
    Ok(NoContent)
}
