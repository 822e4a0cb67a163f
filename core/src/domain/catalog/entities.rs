use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One catalog record. Loaded once at startup and immutable afterwards.
/// SKUs are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub name: String,
    pub sku: String,
    pub price: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}
