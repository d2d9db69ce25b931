use crate::application::http::{detail::router::DetailApiDoc, recipe::router::RecipeApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RecipeLens API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/detail", api = DetailApiDoc),
    )
)]
pub struct ApiDoc;
