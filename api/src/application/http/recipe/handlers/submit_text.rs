use axum::extract::State;
use recipelens_core::domain::fetch::FetchRequest;

use crate::application::http::{
    recipe::{
        handlers::get_session::SessionResponse, submit_and_enrich,
        validators::SubmitTextRequest,
    },
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/text",
    tag = "recipes",
    summary = "Find recipes from typed ingredients",
    description = "Starts a new fetch session from a free-text ingredient list. Recipes are returned once generated; images keep loading in the background.",
    request_body = SubmitTextRequest,
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn submit_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SubmitTextRequest>,
) -> Result<Response<SessionResponse>, ApiError> {
    let request = FetchRequest::text(payload.text, payload.cuisine);

    Ok(Response::OK(submit_and_enrich(&state, request).await))
}
