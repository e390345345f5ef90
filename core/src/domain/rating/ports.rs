use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    rating::{
        entities::RecipeRating,
        value_objects::{GetRatingInput, RateRecipeInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait RatingRepository: Send + Sync {
    fn get_by_key(
        &self,
        storage_key: String,
    ) -> impl Future<Output = Result<Option<RecipeRating>, CoreError>> + Send;

    /// Inserts the rating, or replaces the one stored under the same key.
    fn upsert(
        &self,
        rating: RecipeRating,
    ) -> impl Future<Output = Result<RecipeRating, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RatingService: Send + Sync {
    fn rate_recipe(
        &self,
        input: RateRecipeInput,
    ) -> impl Future<Output = Result<RecipeRating, CoreError>> + Send;

    fn get_rating(
        &self,
        input: GetRatingInput,
    ) -> impl Future<Output = Result<Option<RecipeRating>, CoreError>> + Send;
}
