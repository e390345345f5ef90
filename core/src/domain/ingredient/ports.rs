use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{entities::RecognizedIngredients, value_objects::RecognizeIngredientsInput},
};

/// Service trait for recognizing ingredients in photos
#[cfg_attr(test, mockall::automock)]
pub trait IngredientService: Send + Sync {
    fn recognize_ingredients(
        &self,
        input: RecognizeIngredientsInput,
    ) -> impl Future<Output = Result<RecognizedIngredients, CoreError>> + Send;
}
