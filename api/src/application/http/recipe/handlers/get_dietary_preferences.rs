use pantrycam_core::domain::recipe::entities::DietaryPreference;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DietaryPreferencesResponse {
    pub success: bool,
    pub data: Vec<DietaryPreference>,
}

#[utoipa::path(
    get,
    path = "/dietary-preferences",
    tag = "recipe",
    summary = "List dietary preferences",
    responses(
        (status = 200, body = DietaryPreferencesResponse)
    ),
)]
pub async fn get_dietary_preferences() -> Result<Response<DietaryPreferencesResponse>, ApiError> {
    Ok(Response::OK(DietaryPreferencesResponse {
        success: true,
        data: DietaryPreference::all().to_vec(),
    }))
}
