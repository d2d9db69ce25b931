use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::{
    recipe::{handlers::get_session::SessionResponse, spawn_enrichment},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RestoreSessionResponse {
    pub restored: bool,
    #[serde(flatten)]
    pub session: SessionResponse,
}

#[utoipa::path(
    post,
    path = "/session/restore",
    tag = "recipes",
    summary = "Restore results after leaving the detail view",
    description = "Reinstates the saved recipe list once per return from the detail view. Images still missing from that list are looked up again in the background. Later calls report `restored: false` and leave the session as is.",
    responses(
        (status = 200, body = RestoreSessionResponse)
    ),
)]
pub async fn restore_session(
    State(state): State<AppState>,
) -> Result<Response<RestoreSessionResponse>, ApiError> {
    let mut selection = state.selection.lock().await;

    let response = match state.fetcher.restore(&mut selection).await {
        Some(restored) => {
            if let Some(enrichment) = restored.enrichment {
                spawn_enrichment(enrichment);
            }
            RestoreSessionResponse {
                restored: true,
                session: SessionResponse::with_input_image(restored.session),
            }
        }
        None => RestoreSessionResponse {
            restored: false,
            session: SessionResponse::with_input_image(state.fetcher.snapshot().await),
        },
    };

    Ok(Response::OK(response))
}
