use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::LegalService;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod cases;
pub mod clients;
pub mod lawyers;
pub mod witnesses;

/// Shared handler state: the single service context of the process.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LegalService>,
}

impl AppState {
    pub fn new(service: LegalService) -> Self {
        Self { service: Arc::new(service) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Unwrap a JSON body, turning any rejection into `Invalid payload`.
pub(crate) fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(v)| v).map_err(ApiError::from)
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/clients", get(clients::list).post(clients::create))
        .route("/clients/:id", get(clients::get))
        .route("/lawyers", get(lawyers::list).post(lawyers::create))
        .route("/lawyers/:id", get(lawyers::get))
        .route("/cases", get(cases::list).post(cases::create))
        .route("/cases/:id", get(cases::get).delete(cases::delete))
        .route("/cases/:id/lawyer/:lawyer_id", put(cases::assign_lawyer))
        .route("/cases/:id/state", put(cases::update_state))
        .route("/witnesses", get(witnesses::list).post(witnesses::create))
        .route("/witnesses/:id", get(witnesses::get));

    api.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
