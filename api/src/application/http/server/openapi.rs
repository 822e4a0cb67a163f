use utoipa::OpenApi;

use crate::application::http::{
    cart::router::CartApiDoc, health::HealthApiDoc, mealplan::router::MealPlanApiDoc,
    order::router::OrderApiDoc, pickup::router::PickupApiDoc, profile::router::ProfileApiDoc,
    scan::router::ScanApiDoc, vision::router::VisionApiDoc,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Cartwise API",
    description = "Smart shopping assistant: profile parsing, cart safety, pickup selection, orders"
))]
pub struct ApiDoc;

/// Aggregate the per-module docs into one document.
pub fn build_openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(ProfileApiDoc::openapi());
    doc.merge(CartApiDoc::openapi());
    doc.merge(PickupApiDoc::openapi());
    doc.merge(OrderApiDoc::openapi());
    doc.merge(ScanApiDoc::openapi());
    doc.merge(MealPlanApiDoc::openapi());
    doc.merge(VisionApiDoc::openapi());
    doc.merge(HealthApiDoc::openapi());
    doc
}
