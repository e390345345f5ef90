use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::value_objects::PhotoDataUri,
};

/// LLM Client trait for calling AI models
///
/// Both calls ask the model for JSON matching `response_schema` and return
/// the raw text of the first candidate; callers own the parsing.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: PhotoDataUri,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
