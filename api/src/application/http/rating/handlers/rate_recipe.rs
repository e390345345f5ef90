use axum::extract::{Path, State};
use pantrycam_core::domain::rating::{
    entities::RecipeRating, ports::RatingService, value_objects::RateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    rating::validators::RateRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RateRecipeResponse {
    pub success: bool,
    pub data: RecipeRating,
}

#[utoipa::path(
    put,
    path = "/{recipe_name}/rating",
    tag = "rating",
    summary = "Rate a recipe",
    description = "Stores 1 to 5 stars for the recipe. A later rating replaces the earlier one",
    request_body = RateRecipeRequest,
    params(
        ("recipe_name" = String, Path, description = "Recipe name"),
    ),
    responses(
        (status = 200, body = RateRecipeResponse),
        (status = 400, body = ApiErrorResponse, description = "Rating out of range"),
    ),
)]
pub async fn rate_recipe(
    Path(recipe_name): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RateRecipeRequest>,
) -> Result<Response<RateRecipeResponse>, ApiError> {
    let rating = state
        .service
        .rate_recipe(RateRecipeInput {
            recipe_name,
            rating: payload.rating,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RateRecipeResponse {
        success: true,
        data: rating,
    }))
}
