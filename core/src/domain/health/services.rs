use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::StoreHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    llm::ports::LLMClient,
    rating::ports::RatingRepository,
};

impl<RT, HC, LLM> HealthCheckService for Service<RT, HC, LLM>
where
    RT: RatingRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn readness(&self) -> Result<StoreHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
