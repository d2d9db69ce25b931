use recipelens_core::domain::{detail::DetailView, recipe::Recipe};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::api_entities::api_error::ApiError;

pub mod get_detail;
pub mod go_back;
pub mod navigate_carousel;
pub mod open_detail;

#[derive(Debug, Serialize, ToSchema)]
pub struct DetailResponse {
    pub recipe: Recipe,
    pub cursor: usize,
    pub image_count: usize,
    /// Image under the cursor, or the bundled fallback when there is none.
    pub current_image: String,
}

impl TryFrom<&DetailView> for DetailResponse {
    type Error = ApiError;

    fn try_from(view: &DetailView) -> Result<Self, Self::Error> {
        let recipe = view
            .recipe()
            .cloned()
            .ok_or_else(|| ApiError::NotFound("No recipe selected".to_string()))?;

        Ok(Self {
            recipe,
            cursor: view.cursor(),
            image_count: view.image_count(),
            current_image: view.current_image().to_string(),
        })
    }
}
