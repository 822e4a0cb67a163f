use axum::extract::State;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cartwise_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteProfileResponse {
    pub success: bool,
}

#[utoipa::path(
    delete,
    path = "/profile",
    tag = "profile",
    summary = "Delete the stored profile",
    responses(
        (status = 200, body = DeleteProfileResponse)
    )
)]
pub async fn delete_profile(
    State(state): State<AppState>,
) -> Result<Response<DeleteProfileResponse>, ApiError> {
    state.service.clear_profile().await.map_err(ApiError::from)?;
    Ok(Response::OK(DeleteProfileResponse { success: true }))
}
