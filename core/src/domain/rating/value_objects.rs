use crate::domain::common::entities::app_errors::CoreError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Longest recipe name a rating can be stored under, in characters.
pub const MAX_RECIPE_NAME_CHARS: usize = 200;

const STORAGE_KEY_PREFIX: &str = "recipe-rating-";

/// A star rating in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, CoreError> {
        u8::try_from(value)
            .ok()
            .filter(|value| (MIN_RATING..=MAX_RATING).contains(value))
            .map(Self)
            .ok_or(CoreError::InvalidRating)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Key a rating is stored under, one per recipe name.
pub fn rating_storage_key(recipe_name: &str) -> String {
    format!("{STORAGE_KEY_PREFIX}{recipe_name}")
}

#[derive(Debug, Clone)]
pub struct RateRecipeInput {
    pub recipe_name: String,
    pub rating: i64,
}

#[derive(Debug, Clone)]
pub struct GetRatingInput {
    pub recipe_name: String,
}
