use axum::extract::{Multipart, State};
use recipelens_core::domain::{
    fetch::{FetchRequest, ImageSlot, SearchInput},
    recipe::ImagePayload,
};

use crate::application::http::{
    recipe::{handlers::get_session::SessionResponse, submit_and_enrich},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const MAX_CUISINE_LENGTH: usize = 64;

fn check_image_size(image: &ImagePayload) -> Result<(), ApiError> {
    if image.data.len() > MAX_IMAGE_SIZE {
        return Err(ApiError::BadRequest(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        )));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "recipes",
    summary = "Find recipes from a photo",
    description = "Starts a new fetch session from a photo of ingredients, sent as an `image` file part or an `image_data_url` text part, with an optional `cuisine`. The photo is checked for food before recipes are generated.",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn submit_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<SessionResponse>, ApiError> {
    let mut image: Option<ImagePayload> = None;
    let mut cuisine: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                let payload = ImagePayload::new(data.to_vec(), mime_type);
                check_image_size(&payload)?;
                image = Some(payload);
            }
            "image_data_url" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read image_data_url: {}", e))
                })?;

                let payload = ImagePayload::from_data_url(value.trim())?;
                check_image_size(&payload)?;
                image = Some(payload);
            }
            "cuisine" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read cuisine: {}", e)))?;

                if value.chars().count() > MAX_CUISINE_LENGTH {
                    return Err(ApiError::ValidationError(format!(
                        "cuisine must be at most {} characters",
                        MAX_CUISINE_LENGTH
                    )));
                }
                cuisine = Some(value);
            }
            _ => {}
        }
    }

    let slot = image.map_or(ImageSlot::Empty, ImageSlot::Ready);
    let request = FetchRequest {
        input: SearchInput::Image(slot),
        cuisine,
    };

    Ok(Response::OK(submit_and_enrich(&state, request).await))
}
