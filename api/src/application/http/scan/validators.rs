use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ScanProductRequest {
    /// Decoded QR/barcode payload: the product SKU.
    #[validate(length(min = 1, message = "sku must not be empty"))]
    pub sku: String,
}
