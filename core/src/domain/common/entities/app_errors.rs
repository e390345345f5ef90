use thiserror::Error;

/// Errors surfaced by the core services.
///
/// The display strings of the user-facing variants are shown to end users
/// as-is, so keep them readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid image format. Please upload a valid image.")]
    InvalidPhoto,

    #[error("No ingredients were recognized. Please try a clearer image.")]
    NoIngredientsRecognized,

    #[error("Failed to recognize ingredients. Please try another image.")]
    RecognitionFailed,

    #[error("Invalid input. At least one ingredient is required.")]
    InvalidRecipeInput,

    #[error("Unknown dietary preference: {0}")]
    UnknownDietaryPreference(String),

    #[error("Failed to generate a recipe. Please try again.")]
    RecipeGenerationFailed,

    #[error("Invalid input. At least one recipe is required.")]
    InvalidFilterInput,

    #[error("Failed to filter recipes. Please try again.")]
    RecipeFilterFailed,

    #[error("Rating must be between 1 and 5.")]
    InvalidRating,

    #[error("Recipe name is required.")]
    InvalidRecipeName,

    #[error("Recipe name must be at most 200 characters.")]
    RecipeNameTooLong,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    InternalServerError,
}
