use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    recognize_ingredients::{__path_recognize_ingredients, recognize_ingredients},
    upload_ingredients_photo::{__path_upload_ingredients_photo, upload_ingredients_photo},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(recognize_ingredients, upload_ingredients_photo))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients/recognize", state.args.server.root_path),
            post(recognize_ingredients),
        )
        .route(
            &format!("{}/ingredients/recognize/upload", state.args.server.root_path),
            post(upload_ingredients_photo),
        )
}
