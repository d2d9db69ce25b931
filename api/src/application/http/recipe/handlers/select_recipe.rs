use axum::extract::{Path, State};
use recipelens_core::domain::recipe::Recipe;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SelectRecipeResponse {
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/session/recipes/{index}/select",
    tag = "recipes",
    summary = "Select a recipe for the detail view",
    description = "Stores the recipe, the current list and the input image in the shared selection.",
    responses(
        (status = 200, body = SelectRecipeResponse),
        (status = 404, description = "No recipe at this index")
    ),
    params(
        ("index" = usize, Path, description = "Position in the current recipe list"),
    ),
)]
pub async fn select_recipe(
    Path(index): Path<usize>,
    State(state): State<AppState>,
) -> Result<Response<SelectRecipeResponse>, ApiError> {
    let mut selection = state.selection.lock().await;
    let recipe = state
        .fetcher
        .select_recipe(index, &mut selection)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SelectRecipeResponse { data: recipe }))
}
