use std::sync::Arc;

use crate::domain::{
    health::ports::HealthCheckRepository, llm::ports::LLMClient,
    rating::ports::RatingRepository,
};

/// Holds the adapters every domain service runs against.
///
/// The domain service traits (`IngredientService`, `RecipeService`,
/// `RatingService`, `HealthCheckService`) are all implemented on this type.
pub struct Service<RT, HC, LLM>
where
    RT: RatingRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub(crate) rating_repository: Arc<RT>,
    pub(crate) health_check_repository: Arc<HC>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<RT, HC, LLM> Service<RT, HC, LLM>
where
    RT: RatingRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub fn new(rating_repository: RT, health_check_repository: HC, llm_client: LLM) -> Self {
        Self {
            rating_repository: Arc::new(rating_repository),
            health_check_repository: Arc::new(health_check_repository),
            llm_client: Arc::new(llm_client),
        }
    }
}

impl<RT, HC, LLM> Clone for Service<RT, HC, LLM>
where
    RT: RatingRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            rating_repository: Arc::clone(&self.rating_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
