use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, normalize_entries, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    prompt::{FILTER_RECIPES_PROMPT, GENERATE_RECIPE_PROMPT, bullet_list},
    rating::ports::RatingRepository,
    recipe::{
        entities::Recipe,
        ports::RecipeService,
        schema::{get_recipe_filter_schema, get_recipe_schema},
        value_objects::{DietaryPreferenceSet, FilterRecipesInput, GenerateRecipeInput},
    },
};

impl<RT, HC, LLM> RecipeService for Service<RT, HC, LLM>
where
    RT: RatingRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all, fields(ingredients = input.ingredients.len()))]
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        let ingredients = normalize_entries(input.ingredients);
        if ingredients.is_empty() {
            return Err(CoreError::InvalidRecipeInput);
        }

        let preferences = DietaryPreferenceSet::parse(&input.dietary_preferences)?;

        let prompt = GENERATE_RECIPE_PROMPT.render(&[
            ("ingredients", bullet_list(&ingredients)),
            ("dietary_preferences", bullet_list(&preferences.labels())),
        ]);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_schema())
            .await
            .map_err(|e| {
                error!("Recipe generation failed: {}", e);
                CoreError::RecipeGenerationFailed
            })?;

        let recipe: Recipe = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Failed to parse recipe response: {}", e);
            CoreError::RecipeGenerationFailed
        })?;

        if !recipe.is_complete() {
            error!("LLM returned an incomplete recipe: {:?}", recipe);
            return Err(CoreError::RecipeGenerationFailed);
        }

        info!(recipe_name = %recipe.recipe_name, "Generated recipe");
        Ok(recipe)
    }

    #[instrument(skip_all, fields(recipes = input.recipes.len()))]
    async fn filter_recipes(&self, input: FilterRecipesInput) -> Result<Vec<String>, CoreError> {
        let recipes = normalize_entries(input.recipes);
        if recipes.is_empty() {
            return Err(CoreError::InvalidFilterInput);
        }

        let preferences = DietaryPreferenceSet::parse(&input.dietary_preferences)?;
        if preferences.is_empty() {
            return Ok(recipes);
        }

        let prompt = FILTER_RECIPES_PROMPT.render(&[
            ("recipes", bullet_list(&recipes)),
            ("dietary_preferences", bullet_list(&preferences.labels())),
        ]);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_filter_schema())
            .await
            .map_err(|e| {
                error!("Recipe filtering failed: {}", e);
                CoreError::RecipeFilterFailed
            })?;

        let kept: Vec<String> = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Failed to parse recipe filter response: {}", e);
            CoreError::RecipeFilterFailed
        })?;

        // Only suggestions that were asked about survive, in input order.
        let kept: Vec<String> = kept
            .iter()
            .map(|recipe| recipe.trim().to_lowercase())
            .collect();

        Ok(recipes
            .into_iter()
            .filter(|recipe| kept.contains(&recipe.to_lowercase()))
            .collect())
    }
}
