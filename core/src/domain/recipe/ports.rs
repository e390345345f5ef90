use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::Recipe,
        value_objects::{FilterRecipesInput, GenerateRecipeInput},
    },
};

/// Service trait for recipe generation and filtering
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    /// Keeps the suggestions that satisfy every dietary preference.
    fn filter_recipes(
        &self,
        input: FilterRecipesInput,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;
}
