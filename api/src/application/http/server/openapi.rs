use utoipa::OpenApi;

use crate::application::http::{
    health::router::HealthApiDoc, ingredient::router::IngredientApiDoc,
    rating::router::RatingApiDoc, recipe::router::RecipeApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PantryCam API",
        description = "Photograph your ingredients, get a recipe back"
    ),
    nest(
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/recipes", api = RatingApiDoc),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// The full document, including the routes that are not nested.
    pub fn document() -> utoipa::openapi::OpenApi {
        let mut openapi = Self::openapi();
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
