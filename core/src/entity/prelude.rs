pub use super::recipe_ratings::Entity as RecipeRatings;
