use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::{Case, CasePayload};
use serde::{Deserialize, Serialize};

use super::{payload, AppState};
use crate::errors::ApiError;

/// Body of `PUT /cases/:id/state`.
#[derive(Debug, Deserialize, Serialize)]
pub struct StateUpdate {
    pub state: String,
}

#[utoipa::path(get, path = "/cases", tag = "cases", responses((status = 200, description = "All cases")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Case>>, ApiError> {
    Ok(Json(state.service.get_all_cases().await?))
}

#[utoipa::path(post, path = "/cases", tag = "cases", request_body = crate::openapi::CasePayloadDoc, responses((status = 200, description = "Created case"), (status = 400, description = "Invalid payload")))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CasePayload>, JsonRejection>,
) -> Result<Json<Case>, ApiError> {
    let input = payload(body)?;
    Ok(Json(state.service.add_case(input).await?))
}

#[utoipa::path(get, path = "/cases/{id}", tag = "cases", params(("id" = String, Path, description = "Case id")), responses((status = 200, description = "OK"), (status = 404, description = "Case not found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Case>, ApiError> {
    Ok(Json(state.service.get_case(&id).await?))
}

/// Returns the removed case.
#[utoipa::path(delete, path = "/cases/{id}", tag = "cases", params(("id" = String, Path, description = "Case id")), responses((status = 200, description = "Removed case"), (status = 404, description = "Case not found")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Case>, ApiError> {
    Ok(Json(state.service.delete_case(&id).await?))
}

#[utoipa::path(
    put,
    path = "/cases/{id}/lawyer/{lawyer_id}",
    tag = "cases",
    params(("id" = String, Path, description = "Case id"), ("lawyer_id" = String, Path, description = "Lawyer id")),
    responses((status = 200, description = "Updated case"), (status = 404, description = "Case or lawyer missing"))
)]
pub async fn assign_lawyer(
    State(state): State<AppState>,
    Path((id, lawyer_id)): Path<(String, String)>,
) -> Result<Json<Case>, ApiError> {
    Ok(Json(state.service.assign_lawyer_to_case(&id, &lawyer_id).await?))
}

#[utoipa::path(
    put,
    path = "/cases/{id}/state",
    tag = "cases",
    params(("id" = String, Path, description = "Case id")),
    request_body = crate::openapi::StateUpdateDoc,
    responses((status = 200, description = "Updated case"), (status = 400, description = "Invalid payload"), (status = 404, description = "Case does not exist"))
)]
pub async fn update_state(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StateUpdate>, JsonRejection>,
) -> Result<Json<Case>, ApiError> {
    let update = payload(body)?;
    Ok(Json(state.service.update_case_state(&id, &update.state).await?))
}
