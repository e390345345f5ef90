use axum::extract::State;
use pantrycam_core::domain::health::{entities::StoreHealthStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub data: StoreHealthStatus,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    summary = "Rating store health",
    responses(
        (status = 200, body = HealthResponse),
        (status = 503, body = ApiErrorResponse, description = "Rating store unreachable"),
    ),
)]
pub async fn health(State(state): State<AppState>) -> Result<Response<HealthResponse>, ApiError> {
    let status = state.service.readness().await.map_err(ApiError::from)?;

    if !status.healthy {
        warn!(backend = %status.backend, "rating store is unhealthy");
        return Err(ApiError::ServiceUnavailable(format!(
            "Rating store ({}) is unavailable",
            status.backend
        )));
    }

    Ok(Response::OK(HealthResponse {
        success: true,
        data: status,
    }))
}
