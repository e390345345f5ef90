use axum::extract::State;
use pantrycam_core::domain::ingredient::{
    entities::RecognizedIngredients, ports::IngredientService,
    value_objects::RecognizeIngredientsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    ingredient::validators::RecognizeIngredientsRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecognizeIngredientsResponse {
    pub success: bool,
    pub data: RecognizedIngredients,
}

impl From<RecognizedIngredients> for RecognizeIngredientsResponse {
    fn from(data: RecognizedIngredients) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[utoipa::path(
    post,
    path = "/recognize",
    tag = "ingredient",
    summary = "Recognize ingredients in a photo",
    description = "Sends a base64 data URI image to the model and returns the ingredients it sees",
    request_body = RecognizeIngredientsRequest,
    responses(
        (status = 200, body = RecognizeIngredientsResponse),
        (status = 400, body = ApiErrorResponse, description = "Malformed image"),
        (status = 422, body = ApiErrorResponse, description = "Nothing recognized"),
        (status = 502, body = ApiErrorResponse, description = "Model call failed"),
    ),
)]
pub async fn recognize_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecognizeIngredientsRequest>,
) -> Result<Response<RecognizeIngredientsResponse>, ApiError> {
    let result = state
        .service
        .recognize_ingredients(RecognizeIngredientsInput {
            photo_data_uri: payload.photo_data_uri,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result.into()))
}
