use super::handlers::{
    clear_session::{__path_clear_session, clear_session},
    get_session::{__path_get_session, get_session},
    restore_session::{__path_restore_session, restore_session},
    select_recipe::{__path_select_recipe, select_recipe},
    submit_image::{__path_submit_image, MAX_IMAGE_SIZE, submit_image},
    submit_text::{__path_submit_text, submit_text},
    switch_mode::{__path_switch_mode, switch_mode},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use utoipa::OpenApi;

// Base64 data URLs are about a third larger than the decoded image.
const MAX_IMAGE_BODY: usize = MAX_IMAGE_SIZE * 2;

#[derive(OpenApi)]
#[openapi(paths(
    submit_text,
    submit_image,
    get_session,
    clear_session,
    switch_mode,
    restore_session,
    select_recipe
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/text", state.args.server.root_path),
            post(submit_text),
        )
        .route(
            &format!("{}/recipes/image", state.args.server.root_path),
            post(submit_image).layer(DefaultBodyLimit::max(MAX_IMAGE_BODY)),
        )
        .route(
            &format!("{}/recipes/session", state.args.server.root_path),
            get(get_session).delete(clear_session),
        )
        .route(
            &format!("{}/recipes/session/mode", state.args.server.root_path),
            put(switch_mode),
        )
        .route(
            &format!("{}/recipes/session/restore", state.args.server.root_path),
            post(restore_session),
        )
        .route(
            &format!(
                "{}/recipes/session/recipes/{{index}}/select",
                state.args.server.root_path
            ),
            post(select_recipe),
        )
}
