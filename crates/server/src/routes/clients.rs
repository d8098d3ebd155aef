use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use models::{Client, ClientPayload};

use super::{payload, AppState};
use crate::errors::ApiError;

#[utoipa::path(get, path = "/clients", tag = "clients", responses((status = 200, description = "All clients")))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Client>>, ApiError> {
    Ok(Json(state.service.get_all_clients().await?))
}

#[utoipa::path(post, path = "/clients", tag = "clients", request_body = crate::openapi::ClientPayloadDoc, responses((status = 200, description = "Created client"), (status = 400, description = "Invalid payload")))]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<ClientPayload>, JsonRejection>,
) -> Result<Json<Client>, ApiError> {
    let input = payload(body)?;
    Ok(Json(state.service.add_client(input).await?))
}

#[utoipa::path(get, path = "/clients/{id}", tag = "clients", params(("id" = String, Path, description = "Client id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Client>, ApiError> {
    Ok(Json(state.service.get_client(&id).await?))
}
