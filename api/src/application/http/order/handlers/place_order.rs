use axum::extract::State;

use crate::application::http::{
    order::validators::PlaceOrderRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cartwise_core::domain::order::{ports::OrderService, value_objects::PlaceOrderInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub order_id: String,
}

#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    summary = "Place an order",
    description = "Appends the order to the order log and returns its generated id",
    responses(
        (status = 200, body = PlaceOrderResponse),
        (status = 400, description = "Missing required order fields")
    ),
    request_body = PlaceOrderRequest
)]
pub async fn place_order(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PlaceOrderRequest>,
) -> Result<Response<PlaceOrderResponse>, ApiError> {
    let order = state
        .service
        .place_order(PlaceOrderInput {
            cart: payload.cart,
            quantities: payload.quantities,
            store: payload.store,
            pickup_code: payload.pickup_code,
            profile: payload.profile,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(PlaceOrderResponse {
        success: true,
        order_id: order.order_id,
    }))
}
