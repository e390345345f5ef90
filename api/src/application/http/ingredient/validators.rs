use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeIngredientsRequest {
    /// `data:image/<type>;base64,<payload>`
    #[validate(length(min = 1, message = "Invalid image format. Please upload a valid image."))]
    pub photo_data_uri: String,
}
