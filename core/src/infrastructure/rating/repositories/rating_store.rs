use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health::{entities::StoreHealthStatus, ports::HealthCheckRepository},
        rating::{entities::RecipeRating, ports::RatingRepository},
    },
    infrastructure::rating::repositories::{InMemoryRatingRepository, PostgresRatingRepository},
};

/// The rating backend chosen at startup.
#[derive(Debug, Clone)]
pub enum RatingStore {
    Postgres(PostgresRatingRepository),
    InMemory(InMemoryRatingRepository),
}

impl RatingRepository for RatingStore {
    async fn get_by_key(&self, storage_key: String) -> Result<Option<RecipeRating>, CoreError> {
        match self {
            RatingStore::Postgres(repository) => repository.get_by_key(storage_key).await,
            RatingStore::InMemory(repository) => repository.get_by_key(storage_key).await,
        }
    }

    async fn upsert(&self, rating: RecipeRating) -> Result<RecipeRating, CoreError> {
        match self {
            RatingStore::Postgres(repository) => repository.upsert(rating).await,
            RatingStore::InMemory(repository) => repository.upsert(rating).await,
        }
    }
}

impl HealthCheckRepository for RatingStore {
    async fn readness(&self) -> Result<StoreHealthStatus, CoreError> {
        match self {
            RatingStore::Postgres(repository) => repository.readness().await,
            RatingStore::InMemory(repository) => repository.readness().await,
        }
    }
}
