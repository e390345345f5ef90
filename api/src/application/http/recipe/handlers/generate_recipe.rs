use axum::extract::State;
use pantrycam_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipeResponse {
    pub success: bool,
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate a recipe",
    description = "Generates one recipe from the ingredient list, honoring the dietary preferences",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, body = ApiErrorResponse, description = "No ingredients or unknown preference"),
        (status = 502, body = ApiErrorResponse, description = "Model call failed"),
    ),
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeRequest>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .generate_recipe(GenerateRecipeInput {
            ingredients: payload.ingredients,
            dietary_preferences: payload.dietary_preferences.unwrap_or_default(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse {
        success: true,
        data: recipe,
    }))
}
