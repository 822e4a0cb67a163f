use super::handlers::suggest_pickup::{__path_suggest_pickup, suggest_pickup};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(suggest_pickup))]
pub struct PickupApiDoc;

pub fn pickup_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/pickup/suggestion", state.args.server.root_path),
        post(suggest_pickup),
    )
}
