use serde::Deserialize;
use tracing::{error, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    ingredient::{
        entities::RecognizedIngredients,
        ports::IngredientService,
        schema::get_recognition_schema,
        value_objects::{PhotoDataUri, RecognizeIngredientsInput},
    },
    llm::ports::LLMClient,
    prompt::RECOGNIZE_INGREDIENTS_PROMPT,
    rating::ports::RatingRepository,
};

#[derive(Debug, Deserialize)]
struct RecognitionReply {
    #[serde(default)]
    ingredients: Vec<String>,
}

impl<RT, HC, LLM> IngredientService for Service<RT, HC, LLM>
where
    RT: RatingRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    #[instrument(skip_all)]
    async fn recognize_ingredients(
        &self,
        input: RecognizeIngredientsInput,
    ) -> Result<RecognizedIngredients, CoreError> {
        let photo = PhotoDataUri::parse(&input.photo_data_uri).inspect_err(|_| {
            warn!("Rejected photo: not a base64 image data URI");
        })?;

        let prompt = RECOGNIZE_INGREDIENTS_PROMPT.render(&[]);

        let raw_response = self
            .llm_client
            .generate_with_image(prompt, photo, get_recognition_schema())
            .await
            .map_err(|e| {
                error!("Ingredient recognition failed: {}", e);
                CoreError::RecognitionFailed
            })?;

        let reply: RecognitionReply = serde_json::from_str(&raw_response).map_err(|e| {
            error!("Failed to parse recognition response: {}", e);
            CoreError::RecognitionFailed
        })?;

        let recognized = RecognizedIngredients::new(reply.ingredients);
        if recognized.is_empty() {
            return Err(CoreError::NoIngredientsRecognized);
        }

        Ok(recognized)
    }
}
