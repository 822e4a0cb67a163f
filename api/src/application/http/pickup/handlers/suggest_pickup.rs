use axum::extract::State;

use crate::application::http::{
    cart::validators::normalize_items,
    pickup::validators::PickupSuggestionRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cartwise_core::domain::fulfillment::{ports::PickupService, value_objects::PickupSuggestion};

#[utoipa::path(
    post,
    path = "/pickup/suggestion",
    tag = "pickup",
    summary = "Pick the best pickup store",
    description = "Chooses the store with the greatest in-stock coverage, lists packed and missing items, and issues a pickup code",
    responses(
        (status = 200, body = PickupSuggestion),
        (status = 400, description = "No cart provided")
    ),
    request_body = PickupSuggestionRequest
)]
pub async fn suggest_pickup(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PickupSuggestionRequest>,
) -> Result<Response<PickupSuggestion>, ApiError> {
    let items = normalize_items(payload.cart);

    let suggestion = state
        .service
        .suggest_pickup(items)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(suggestion))
}
