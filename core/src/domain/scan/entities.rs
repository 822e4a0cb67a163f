use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalog::entities::Product;

/// Safety analysis for one scanned product.
///
/// The payload is the decoded QR/barcode string (a SKU); decoding and
/// encoding themselves stay with the clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanReport {
    pub product: Product,
    pub is_safe: bool,
    pub flagged_allergens: Vec<String>,
    /// Up to two catalog products free of the profile's allergies,
    /// first-seen order.
    pub alternatives: Vec<Product>,
}
