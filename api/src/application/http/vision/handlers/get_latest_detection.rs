use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cartwise_core::domain::vision::entities::VisionReport;

#[utoipa::path(
    get,
    path = "/vision/latest",
    tag = "vision",
    summary = "Get the latest allergen report",
    responses(
        (status = 200, body = VisionReport),
        (status = 404, description = "No image processed yet")
    )
)]
pub async fn get_latest_detection(
    State(state): State<AppState>,
) -> Result<Response<VisionReport>, ApiError> {
    state
        .latest_vision_report
        .read()
        .await
        .clone()
        .map(Response::OK)
        .ok_or_else(|| ApiError::NotFound("no allergen report available yet".to_string()))
}
