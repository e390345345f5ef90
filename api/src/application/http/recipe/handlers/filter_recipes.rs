use axum::extract::State;
use pantrycam_core::domain::recipe::{ports::RecipeService, value_objects::FilterRecipesInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::FilterRecipesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterRecipesResponse {
    pub success: bool,
    pub data: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/filter",
    tag = "recipe",
    summary = "Filter recipe suggestions",
    description = "Keeps the recipe names that satisfy every dietary preference",
    request_body = FilterRecipesRequest,
    responses(
        (status = 200, body = FilterRecipesResponse),
        (status = 400, body = ApiErrorResponse, description = "No recipes or unknown preference"),
        (status = 502, body = ApiErrorResponse, description = "Model call failed"),
    ),
)]
pub async fn filter_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FilterRecipesRequest>,
) -> Result<Response<FilterRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .filter_recipes(FilterRecipesInput {
            recipes: payload.recipes,
            dietary_preferences: payload.dietary_preferences,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FilterRecipesResponse {
        success: true,
        data: recipes,
    }))
}
