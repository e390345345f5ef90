pub mod common;
pub mod health;
pub mod ingredient;
pub mod llm;
pub mod prompt;
pub mod rating;
pub mod recipe;
