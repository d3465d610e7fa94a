//! Account handlers

use axum::{extract::State, Json};
use gourmet_service::dto::{RegisterRequest, RegisterResponse};
use gourmet_service::UserService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/register/
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}
