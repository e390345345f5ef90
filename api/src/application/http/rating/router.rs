use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_recipe_rating::{__path_get_recipe_rating, get_recipe_rating},
    rate_recipe::{__path_rate_recipe, rate_recipe},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_recipe_rating, rate_recipe))]
pub struct RatingApiDoc;

pub fn rating_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/recipes/{{recipe_name}}/rating", state.args.server.root_path),
        get(get_recipe_rating).put(rate_recipe),
    )
}
