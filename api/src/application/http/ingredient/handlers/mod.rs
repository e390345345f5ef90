pub mod recognize_ingredients;
pub mod upload_ingredients_photo;
