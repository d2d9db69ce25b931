use axum::extract::State;

use crate::application::http::{
    recipe::{handlers::get_session::SessionResponse, validators::SwitchModeRequest},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/session/mode",
    tag = "recipes",
    summary = "Switch between image and text input",
    description = "Resets the session for the chosen input mode and clears the shared selection.",
    request_body = SwitchModeRequest,
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn switch_mode(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SwitchModeRequest>,
) -> Result<Response<SessionResponse>, ApiError> {
    let mut selection = state.selection.lock().await;
    let session = state
        .fetcher
        .switch_input_mode(payload.mode, &mut selection)
        .await;

    Ok(Response::OK(session.into()))
}
