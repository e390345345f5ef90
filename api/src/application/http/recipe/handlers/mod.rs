pub mod filter_recipes;
pub mod generate_recipe;
pub mod get_dietary_preferences;
