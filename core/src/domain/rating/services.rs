use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    llm::ports::LLMClient,
    rating::{
        entities::RecipeRating,
        ports::{RatingRepository, RatingService},
        value_objects::{
            GetRatingInput, MAX_RECIPE_NAME_CHARS, RateRecipeInput, Rating, rating_storage_key,
        },
    },
};

fn ensure_recipe_name(recipe_name: &str) -> Result<(), CoreError> {
    if recipe_name.trim().is_empty() {
        return Err(CoreError::InvalidRecipeName);
    }
    if recipe_name.chars().count() > MAX_RECIPE_NAME_CHARS {
        return Err(CoreError::RecipeNameTooLong);
    }
    Ok(())
}

impl<RT, HC, LLM> RatingService for Service<RT, HC, LLM>
where
    RT: RatingRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(recipe_name = %input.recipe_name))]
    async fn rate_recipe(&self, input: RateRecipeInput) -> Result<RecipeRating, CoreError> {
        ensure_recipe_name(&input.recipe_name)?;
        let rating = Rating::new(input.rating)?;

        let key = rating_storage_key(&input.recipe_name);
        let recipe_rating = match self.rating_repository.get_by_key(key).await? {
            Some(mut existing) => {
                debug!(previous = existing.rating, "Replacing existing rating");
                existing.rerate(rating);
                existing
            }
            None => RecipeRating::new(input.recipe_name, rating),
        };

        self.rating_repository.upsert(recipe_rating).await
    }

    #[instrument(skip(self), fields(recipe_name = %input.recipe_name))]
    async fn get_rating(&self, input: GetRatingInput) -> Result<Option<RecipeRating>, CoreError> {
        ensure_recipe_name(&input.recipe_name)?;

        self.rating_repository
            .get_by_key(rating_storage_key(&input.recipe_name))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{llm::ports::MockLLMClient, rating::ports::MockRatingRepository},
        infrastructure::rating::repositories::InMemoryRatingRepository,
    };

    fn service() -> Service<InMemoryRatingRepository, InMemoryRatingRepository, MockLLMClient> {
        let store = InMemoryRatingRepository::default();
        Service::new(store.clone(), store, MockLLMClient::new())
    }

    fn rate(recipe_name: &str, rating: i64) -> RateRecipeInput {
        RateRecipeInput {
            recipe_name: recipe_name.to_string(),
            rating,
        }
    }

    fn get(recipe_name: &str) -> GetRatingInput {
        GetRatingInput {
            recipe_name: recipe_name.to_string(),
        }
    }

    #[tokio::test]
    async fn rating_round_trips_for_recipe_name() {
        let service = service();

        let saved = service.rate_recipe(rate("Tomato Soup", 4)).await.unwrap();
        let loaded = service.get_rating(get("Tomato Soup")).await.unwrap();

        assert_eq!(saved.storage_key, "recipe-rating-Tomato Soup");
        assert_eq!(loaded, Some(saved));
    }

    #[tokio::test]
    async fn last_write_wins() {
        let service = service();

        let first = service.rate_recipe(rate("Tomato Soup", 2)).await.unwrap();
        let second = service.rate_recipe(rate("Tomato Soup", 5)).await.unwrap();
        let loaded = service.get_rating(get("Tomato Soup")).await.unwrap().unwrap();

        assert_eq!(second.id, first.id);
        assert_eq!(loaded.rating, 5);
        assert_eq!(loaded.created_at, first.created_at);
    }

    #[tokio::test]
    async fn ratings_are_kept_per_recipe() {
        let service = service();

        service.rate_recipe(rate("Tomato Soup", 3)).await.unwrap();

        assert_eq!(service.get_rating(get("Pea Soup")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn out_of_range_rating_is_not_stored() {
        let mut repository = MockRatingRepository::new();
        repository.expect_get_by_key().never();
        repository.expect_upsert().never();
        let service = Service::new(
            repository,
            InMemoryRatingRepository::default(),
            MockLLMClient::new(),
        );

        for value in [0, 6] {
            assert_eq!(
                service.rate_recipe(rate("Tomato Soup", value)).await,
                Err(CoreError::InvalidRating)
            );
        }
    }

    #[tokio::test]
    async fn overlong_recipe_name_is_rejected_before_storage() {
        let mut repository = MockRatingRepository::new();
        repository.expect_get_by_key().never();
        repository.expect_upsert().never();
        let service = Service::new(
            repository,
            InMemoryRatingRepository::default(),
            MockLLMClient::new(),
        );
        let name = "é".repeat(MAX_RECIPE_NAME_CHARS + 1);

        assert_eq!(
            service.rate_recipe(rate(&name, 3)).await,
            Err(CoreError::RecipeNameTooLong)
        );
        assert_eq!(
            service.get_rating(get(&name)).await,
            Err(CoreError::RecipeNameTooLong)
        );
    }

    #[tokio::test]
    async fn longest_recipe_name_is_accepted() {
        let service = service();
        let name = "é".repeat(MAX_RECIPE_NAME_CHARS);

        let saved = service.rate_recipe(rate(&name, 3)).await.unwrap();

        assert_eq!(saved.recipe_name, name);
    }

    #[tokio::test]
    async fn blank_recipe_name_is_rejected() {
        let service = service();

        assert_eq!(
            service.rate_recipe(rate("  ", 3)).await,
            Err(CoreError::InvalidRecipeName)
        );
        assert_eq!(
            service.get_rating(get("")).await,
            Err(CoreError::InvalidRecipeName)
        );
    }
}
