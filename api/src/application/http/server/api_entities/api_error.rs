use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pantrycam_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, error};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Failure body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    UnprocessableEntity(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidPhoto
            | CoreError::InvalidRecipeInput
            | CoreError::UnknownDietaryPreference(_)
            | CoreError::InvalidFilterInput
            | CoreError::InvalidRating
            | CoreError::InvalidRecipeName
            | CoreError::RecipeNameTooLong => ApiError::BadRequest(error.to_string()),
            CoreError::NoIngredientsRecognized => ApiError::UnprocessableEntity(error.to_string()),
            CoreError::RecognitionFailed
            | CoreError::RecipeGenerationFailed
            | CoreError::RecipeFilterFailed => ApiError::BadGateway(error.to_string()),
            CoreError::ExternalServiceError(detail) => {
                error!("external service error: {}", detail);
                ApiError::BadGateway("The AI service is unavailable. Please try again.".to_string())
            }
            CoreError::ServiceUnavailable => ApiError::ServiceUnavailable(error.to_string()),
            CoreError::InternalServerError => ApiError::InternalServerError(error.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect::<Vec<String>>()
            .join(", ");

        ApiError::BadRequest(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorResponse {
            success: false,
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules and answers with the
/// failure envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                debug!("rejected json body: {}", rejection.body_text());
                ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
            })?;

        value.validate()?;

        Ok(ValidateJson(value))
    }
}
