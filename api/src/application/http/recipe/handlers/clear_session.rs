use axum::extract::State;

use crate::application::http::{
    recipe::handlers::get_session::SessionResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    delete,
    path = "/session",
    tag = "recipes",
    summary = "Clear the submitted image and results",
    description = "Drops the current results and the shared selection. Pending image lookups of the dropped session are discarded.",
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn clear_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    let mut selection = state.selection.lock().await;
    let session = state.fetcher.clear_image(&mut selection).await;

    Ok(Response::OK(session.into()))
}
