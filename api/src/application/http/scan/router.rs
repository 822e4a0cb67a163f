use super::handlers::scan_product::{__path_scan_product, scan_product};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(scan_product))]
pub struct ScanApiDoc;

pub fn scan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/scan", state.args.server.root_path),
        post(scan_product),
    )
}
