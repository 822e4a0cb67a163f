use super::handlers::process_cart::{__path_process_cart, process_cart};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(process_cart))]
pub struct CartApiDoc;

pub fn cart_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/cart/process", state.args.server.root_path),
        post(process_cart),
    )
}
