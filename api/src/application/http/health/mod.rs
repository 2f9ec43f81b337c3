use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
    routing::get,
};
use serde::Serialize;
use smartkheti_core::domain::health::ports::HealthCheckService;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub latency_ms: u64,
}

pub fn health_routes() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let latency_ms = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(HealthResponse {
        status: "ok",
        latency_ms,
    }))
}

async fn readiness(State(state): State<AppState>) -> Result<AxumResponse, ApiError> {
    let database = state.service.readiness().await.map_err(ApiError::from)?;

    let status = if database.reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status, Json(database)).into_response())
}
