use axum::extract::{Path, State};
use pantrycam_core::domain::rating::{
    entities::RecipeRating, ports::RatingService, value_objects::GetRatingInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRecipeRatingResponse {
    pub success: bool,
    /// `null` until the recipe is rated.
    pub data: Option<RecipeRating>,
}

#[utoipa::path(
    get,
    path = "/{recipe_name}/rating",
    tag = "rating",
    summary = "Get a recipe rating",
    params(
        ("recipe_name" = String, Path, description = "Recipe name"),
    ),
    responses(
        (status = 200, body = GetRecipeRatingResponse),
        (status = 400, body = ApiErrorResponse, description = "Blank recipe name"),
    ),
)]
pub async fn get_recipe_rating(
    Path(recipe_name): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<GetRecipeRatingResponse>, ApiError> {
    let rating = state
        .service
        .get_rating(GetRatingInput { recipe_name })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetRecipeRatingResponse {
        success: true,
        data: rating,
    }))
}
