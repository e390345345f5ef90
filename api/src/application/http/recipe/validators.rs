use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    #[validate(length(min = 1, message = "Invalid input. At least one ingredient is required."))]
    #[schema(example = json!(["tomato", "basil", "mozzarella"]))]
    pub ingredients: Vec<String>,

    /// Any of `Vegetarian`, `Vegan`, `Gluten-Free`, `Dairy-Free`, `Nut-Free`.
    #[serde(default)]
    #[schema(example = json!(["Vegetarian"]))]
    pub dietary_preferences: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FilterRecipesRequest {
    #[validate(length(min = 1, message = "Invalid input. At least one recipe is required."))]
    pub recipes: Vec<String>,

    #[serde(default)]
    pub dietary_preferences: Vec<String>,
}
