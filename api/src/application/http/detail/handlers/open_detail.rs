use axum::extract::State;

use crate::application::http::{
    detail::handlers::DetailResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/open",
    tag = "detail",
    summary = "Open the selected recipe",
    description = "Loads the recipe from the shared selection and puts the carousel on its first image.",
    responses(
        (status = 200, body = DetailResponse),
        (status = 404, description = "No recipe selected")
    ),
)]
pub async fn open_detail(
    State(state): State<AppState>,
) -> Result<Response<DetailResponse>, ApiError> {
    let selection = state.selection.lock().await;
    let mut detail = state.detail.lock().await;
    detail.open(&selection);

    Ok(Response::OK(DetailResponse::try_from(&*detail)?))
}
