use super::handlers::{
    detect_allergens::{__path_detect_allergens, detect_allergens},
    get_latest_detection::{__path_get_latest_detection, get_latest_detection},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(detect_allergens, get_latest_detection))]
pub struct VisionApiDoc;

pub fn vision_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;
    Router::new()
        .route(&format!("{root_path}/vision/detect"), post(detect_allergens))
        .route(
            &format!("{root_path}/vision/latest"),
            get(get_latest_detection),
        )
}
