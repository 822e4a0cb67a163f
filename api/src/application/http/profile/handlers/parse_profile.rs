use axum::extract::State;

use crate::application::http::{
    profile::validators::ParseProfileRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cartwise_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/profile",
    tag = "profile",
    summary = "Parse free text into a profile",
    description = "Converts a free-form description into a structured profile document via the LLM and stores it as the latest profile",
    responses(
        (status = 200, body = ProfileResponse)
    ),
    request_body = ParseProfileRequest
)]
pub async fn parse_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ParseProfileRequest>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .parse_profile(payload.user_input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse { profile }))
}
