use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    rating::value_objects::{Rating, rating_storage_key},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRating {
    pub id: Uuid,
    pub storage_key: String,
    pub recipe_name: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeRating {
    pub fn new(recipe_name: String, rating: Rating) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            storage_key: rating_storage_key(&recipe_name),
            recipe_name,
            rating: rating.value(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the stored stars; the last write wins.
    pub fn rerate(&mut self, rating: Rating) {
        self.rating = rating.value();
        self.updated_at = Utc::now();
    }
}
