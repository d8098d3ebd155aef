use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::{Witness, WitnessPayload};

use super::{payload, AppState};
use crate::errors::ApiError;

#[utoipa::path(get, path = "/witnesses", tag = "witnesses", responses((status = 200, description = "All witnesses")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Witness>>, ApiError> {
    Ok(Json(state.service.get_all_witnesses().await?))
}

#[utoipa::path(post, path = "/witnesses", tag = "witnesses", request_body = crate::openapi::WitnessPayloadDoc, responses((status = 200, description = "Created witness"), (status = 400, description = "Invalid payload")))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<WitnessPayload>, JsonRejection>,
) -> Result<Json<Witness>, ApiError> {
    let input = payload(body)?;
    Ok(Json(state.service.add_witness(input).await?))
}

#[utoipa::path(get, path = "/witnesses/{id}", tag = "witnesses", params(("id" = String, Path, description = "Witness id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Witness>, ApiError> {
    Ok(Json(state.service.get_witness(&id).await?))
}
