use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::health::{__path_health, health};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(health))]
pub struct HealthApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/health", state.args.server.root_path),
        get(health),
    )
}
