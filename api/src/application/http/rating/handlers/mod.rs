pub mod get_recipe_rating;
pub mod rate_recipe;
