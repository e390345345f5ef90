pub mod in_memory_rating_repository;
pub mod postgres_rating_repository;
pub mod rating_store;

pub use in_memory_rating_repository::InMemoryRatingRepository;
pub use postgres_rating_repository::PostgresRatingRepository;
pub use rating_store::RatingStore;
