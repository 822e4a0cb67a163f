use super::handlers::place_order::{__path_place_order, place_order};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(place_order))]
pub struct OrderApiDoc;

pub fn order_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/orders", state.args.server.root_path),
        post(place_order),
    )
}
