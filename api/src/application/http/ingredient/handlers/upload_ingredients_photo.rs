use axum::extract::{Multipart, State, multipart::MultipartRejection};
use pantrycam_core::domain::ingredient::{
    ports::IngredientService,
    value_objects::{MAX_PHOTO_BYTES, PhotoDataUri, RecognizeIngredientsInput},
};
use tracing::debug;

use crate::application::http::{
    ingredient::handlers::recognize_ingredients::RecognizeIngredientsResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/recognize/upload",
    tag = "ingredient",
    summary = "Recognize ingredients in an uploaded photo",
    description = "Multipart variant of /recognize. The image goes in the `image` field",
    request_body(content_type = "multipart/form-data", content = String),
    responses(
        (status = 200, body = RecognizeIngredientsResponse),
        (status = 400, body = ApiErrorResponse, description = "Missing or malformed image"),
        (status = 422, body = ApiErrorResponse, description = "Nothing recognized"),
        (status = 502, body = ApiErrorResponse, description = "Model call failed"),
    ),
)]
pub async fn upload_ingredients_photo(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<RecognizeIngredientsResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        ApiError::BadRequest(format!("Invalid multipart body: {}", rejection.body_text()))
    })?;
    let mut photo: Option<PhotoDataUri> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_PHOTO_BYTES {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_PHOTO_BYTES
            )));
        }

        debug!(content_type, bytes = data.len(), "received image upload");
        photo = Some(PhotoDataUri::from_bytes(&content_type, &data)?);
    }

    let photo = photo.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .recognize_ingredients(RecognizeIngredientsInput {
            photo_data_uri: photo.to_uri(),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result.into()))
}
