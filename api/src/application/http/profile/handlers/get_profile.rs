use axum::extract::State;

use super::parse_profile::ProfileResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cartwise_core::domain::profile::ports::ProfileService;

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    summary = "Get the stored profile",
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, description = "No profile stored")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state.service.get_profile().await.map_err(ApiError::from)?;
    Ok(Response::OK(ProfileResponse { profile }))
}
