use axum::{extract::State, http::StatusCode};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

#[utoipa::path(
    post,
    path = "/back",
    tag = "detail",
    summary = "Return to the search view",
    description = "Closes the detail view and flags the selection so the next restore reinstates the saved list.",
    responses(
        (status = 204, description = "Detail view closed")
    ),
)]
pub async fn go_back(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    let mut selection = state.selection.lock().await;
    let mut detail = state.detail.lock().await;

    detail.go_back();
    selection.mark_returning();

    Ok(StatusCode::NO_CONTENT)
}
