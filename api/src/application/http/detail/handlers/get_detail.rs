use axum::extract::State;

use crate::application::http::{
    detail::handlers::DetailResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "detail",
    summary = "Get the open recipe",
    responses(
        (status = 200, body = DetailResponse),
        (status = 404, description = "No recipe open")
    ),
)]
pub async fn get_detail(State(state): State<AppState>) -> Result<Response<DetailResponse>, ApiError> {
    let detail = state.detail.lock().await;

    Ok(Response::OK(DetailResponse::try_from(&*detail)?))
}
