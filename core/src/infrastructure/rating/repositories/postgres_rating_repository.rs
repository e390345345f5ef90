use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    sea_query::OnConflict,
};
use tracing::error;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        health::{entities::StoreHealthStatus, ports::HealthCheckRepository},
        rating::{entities::RecipeRating, ports::RatingRepository},
    },
    entity::recipe_ratings::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresRatingRepository {
    pub db: DatabaseConnection,
}

impl PostgresRatingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RatingRepository for PostgresRatingRepository {
    async fn get_by_key(&self, storage_key: String) -> Result<Option<RecipeRating>, CoreError> {
        let model = Entity::find()
            .filter(Column::StorageKey.eq(storage_key))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe rating: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(RecipeRating::from))
    }

    async fn upsert(&self, rating: RecipeRating) -> Result<RecipeRating, CoreError> {
        let active_model = ActiveModel {
            id: Set(rating.id),
            storage_key: Set(rating.storage_key.clone()),
            recipe_name: Set(rating.recipe_name.clone()),
            rating: Set(i16::from(rating.rating)),
            created_at: Set(rating.created_at.fixed_offset()),
            updated_at: Set(rating.updated_at.fixed_offset()),
        };

        let saved = Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(Column::StorageKey)
                    .update_columns([Column::RecipeName, Column::Rating, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to save recipe rating: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(saved.into())
    }
}

impl HealthCheckRepository for PostgresRatingRepository {
    async fn readness(&self) -> Result<StoreHealthStatus, CoreError> {
        let healthy = match self.db.ping().await {
            Ok(()) => true,
            Err(e) => {
                error!("Database ping failed: {}", e);
                false
            }
        };

        Ok(StoreHealthStatus {
            backend: "postgres".to_string(),
            healthy,
        })
    }
}
