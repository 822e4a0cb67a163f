use axum::extract::State;

use crate::application::http::{
    scan::validators::ScanProductRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use cartwise_core::domain::scan::{entities::ScanReport, ports::ScanService};

#[utoipa::path(
    post,
    path = "/scan",
    tag = "scan",
    summary = "Analyze a scanned product",
    description = "Checks the product behind a decoded QR payload against the stored profile and lists safe alternatives",
    responses(
        (status = 200, body = ScanReport),
        (status = 404, description = "Profile or product not found")
    ),
    request_body = ScanProductRequest
)]
pub async fn scan_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ScanProductRequest>,
) -> Result<Response<ScanReport>, ApiError> {
    let report = state
        .service
        .scan_product(&payload.sku)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
