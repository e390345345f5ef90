use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    filter_recipes::{__path_filter_recipes, filter_recipes},
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_dietary_preferences::{__path_get_dietary_preferences, get_dietary_preferences},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_recipe, filter_recipes, get_dietary_preferences))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/recipes/filter", state.args.server.root_path),
            post(filter_recipes),
        )
        .route(
            &format!("{}/recipes/dietary-preferences", state.args.server.root_path),
            get(get_dietary_preferences),
        )
}
