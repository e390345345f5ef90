use crate::{domain::rating::entities::RecipeRating, entity::recipe_ratings};

impl From<&recipe_ratings::Model> for RecipeRating {
    fn from(model: &recipe_ratings::Model) -> Self {
        Self {
            id: model.id,
            storage_key: model.storage_key.clone(),
            recipe_name: model.recipe_name.clone(),
            rating: u8::try_from(model.rating).unwrap_or_default(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipe_ratings::Model> for RecipeRating {
    fn from(model: recipe_ratings::Model) -> Self {
        Self::from(&model)
    }
}
