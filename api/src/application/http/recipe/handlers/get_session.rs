use axum::extract::State;
use recipelens_core::domain::fetch::FetchSession;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub data: FetchSession,
    /// The submitted image as a data URL. Only sent back by submit and
    /// restore; polls leave it out.
    pub input_image: Option<String>,
}

impl SessionResponse {
    pub fn with_input_image(session: FetchSession) -> Self {
        let input_image = session.input_image.as_ref().map(|image| image.to_data_url());
        Self {
            data: session,
            input_image,
        }
    }
}

impl From<FetchSession> for SessionResponse {
    fn from(session: FetchSession) -> Self {
        Self {
            data: session,
            input_image: None,
        }
    }
}

#[utoipa::path(
    get,
    path = "/session",
    tag = "recipes",
    summary = "Get the current fetch session",
    description = "Returns the recipes, loading flags and error of the current session. Poll this while images_loading is true.",
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
) -> Result<Response<SessionResponse>, ApiError> {
    Ok(Response::OK(state.fetcher.snapshot().await.into()))
}
