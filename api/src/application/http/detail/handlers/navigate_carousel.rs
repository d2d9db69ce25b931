use axum::extract::State;

use crate::application::http::{
    detail::{
        handlers::DetailResponse,
        validators::{CarouselDirection, NavigateCarouselRequest},
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
    path = "/carousel",
    tag = "detail",
    summary = "Move the image carousel",
    description = "Steps to the next or previous image, wrapping at both ends. Does nothing when the recipe has no images.",
    request_body = NavigateCarouselRequest,
    responses(
        (status = 200, body = DetailResponse),
        (status = 404, description = "No recipe open")
    ),
)]
pub async fn navigate_carousel(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<NavigateCarouselRequest>,
) -> Result<Response<DetailResponse>, ApiError> {
    let mut detail = state.detail.lock().await;

    match payload.direction {
        CarouselDirection::Next => detail.next_image(),
        CarouselDirection::Previous => detail.previous_image(),
    }

    Ok(Response::OK(DetailResponse::try_from(&*detail)?))
}
