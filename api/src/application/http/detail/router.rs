use super::handlers::{
    get_detail::{__path_get_detail, get_detail},
    go_back::{__path_go_back, go_back},
    navigate_carousel::{__path_navigate_carousel, navigate_carousel},
    open_detail::{__path_open_detail, open_detail},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(open_detail, get_detail, navigate_carousel, go_back))]
pub struct DetailApiDoc;

pub fn detail_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/detail", state.args.server.root_path),
            get(get_detail),
        )
        .route(
            &format!("{}/detail/open", state.args.server.root_path),
            post(open_detail),
        )
        .route(
            &format!("{}/detail/carousel", state.args.server.root_path),
            post(navigate_carousel),
        )
        .route(
            &format!("{}/detail/back", state.args.server.root_path),
            post(go_back),
        )
}
