use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::{Lawyer, LawyerPayload};

use super::{payload, AppState};
use crate::errors::ApiError;

#[utoipa::path(get, path = "/lawyers", tag = "lawyers", responses((status = 200, description = "All lawyers")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Lawyer>>, ApiError> {
    Ok(Json(state.service.get_all_lawyers().await?))
}

#[utoipa::path(post, path = "/lawyers", tag = "lawyers", request_body = crate::openapi::LawyerPayloadDoc, responses((status = 200, description = "Created lawyer"), (status = 400, description = "Invalid payload")))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<LawyerPayload>, JsonRejection>,
) -> Result<Json<Lawyer>, ApiError> {
    let input = payload(body)?;
    Ok(Json(state.service.add_lawyer(input).await?))
}

#[utoipa::path(get, path = "/lawyers/{id}", tag = "lawyers", params(("id" = String, Path, description = "Lawyer id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Lawyer>, ApiError> {
    Ok(Json(state.service.get_lawyer(&id).await?))
}
