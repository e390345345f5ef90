use tracing::{info, warn};

use crate::{
    domain::common::{
        PantryCamConfig, entities::app_errors::CoreError, pick_api_key, services::Service,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        llm::GeminiLLMClient,
        rating::repositories::{InMemoryRatingRepository, PostgresRatingRepository, RatingStore},
    },
};

pub type PantryCamService = Service<RatingStore, RatingStore, GeminiLLMClient>;

/// Builds the rating store: Postgres when a database is configured,
/// otherwise a process-local map.
pub async fn create_rating_store(config: &PantryCamConfig) -> Result<RatingStore, CoreError> {
    match &config.database {
        Some(database) => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: database.url.clone(),
            })
            .await?;

            info!("ratings are stored in postgres");
            Ok(RatingStore::Postgres(PostgresRatingRepository::new(
                postgres.get_db(),
            )))
        }
        None => {
            warn!("no database configured, ratings are kept in memory");
            Ok(RatingStore::InMemory(InMemoryRatingRepository::new()))
        }
    }
}

pub async fn create_service(config: PantryCamConfig) -> Result<PantryCamService, anyhow::Error> {
    let rating_store = create_rating_store(&config).await?;

    let llm_client = GeminiLLMClient::new(
        pick_api_key(&config.llm.gemini_api_keys),
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );
    info!(model = llm_client.model_name(), "gemini client ready");

    Ok(Service::new(rating_store.clone(), rating_store, llm_client))
}
