use axum::extract::State;

use crate::application::http::{
    cart::validators::{ProcessCartRequest, normalize_items},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cartwise_core::domain::safety::{
    entities::CartEntry, ports::CartService, value_objects::ProcessCartInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProcessCartResponse {
    pub cart: Vec<CartEntry>,
}

#[utoipa::path(
    post,
    path = "/cart/process",
    tag = "cart",
    summary = "Classify a shopping list",
    description = "Resolves each item against the catalog and flags allergen risks, preference warnings, and substitutions",
    responses(
        (status = 200, body = ProcessCartResponse)
    ),
    request_body = ProcessCartRequest
)]
pub async fn process_cart(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ProcessCartRequest>,
) -> Result<Response<ProcessCartResponse>, ApiError> {
    let items = normalize_items(payload.shopping_list);

    let cart = state
        .service
        .process_cart(ProcessCartInput {
            items,
            profile: payload.profile,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProcessCartResponse { cart }))
}
