use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::StoreHealthStatus, ports::HealthCheckRepository},
    rating::{entities::RecipeRating, ports::RatingRepository},
};

/// Process-local rating store keyed by storage key. Ratings are lost on
/// restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRatingRepository {
    ratings: Arc<RwLock<HashMap<String, RecipeRating>>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RatingRepository for InMemoryRatingRepository {
    async fn get_by_key(&self, storage_key: String) -> Result<Option<RecipeRating>, CoreError> {
        Ok(self.ratings.read().await.get(&storage_key).cloned())
    }

    async fn upsert(&self, rating: RecipeRating) -> Result<RecipeRating, CoreError> {
        let mut ratings = self.ratings.write().await;

        let saved = match ratings.get(&rating.storage_key) {
            Some(existing) => RecipeRating {
                id: existing.id,
                created_at: existing.created_at,
                ..rating
            },
            None => rating,
        };

        ratings.insert(saved.storage_key.clone(), saved.clone());
        Ok(saved)
    }
}

impl HealthCheckRepository for InMemoryRatingRepository {
    async fn readness(&self) -> Result<StoreHealthStatus, CoreError> {
        Ok(StoreHealthStatus {
            backend: "memory".to_string(),
            healthy: true,
        })
    }
}
