use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::normalize_entries;

/// Ingredients recognized in a photo, in the order the model listed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecognizedIngredients {
    pub ingredients: Vec<String>,
}

impl RecognizedIngredients {
    pub fn new(ingredients: Vec<String>) -> Self {
        Self {
            ingredients: normalize_entries(ingredients),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
