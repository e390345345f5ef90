use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RateRecipeRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5."))]
    #[schema(minimum = 1, maximum = 5, example = 4)]
    pub rating: i64,
}
