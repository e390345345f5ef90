//! `SeaORM` entities for the tables under `migrations/`.

pub mod prelude;

pub mod recipe_ratings;
