pub mod health;
pub mod ingredient;
pub mod rating;
pub mod recipe;
pub mod server;
