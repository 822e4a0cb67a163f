use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One pickup location with its in-stock SKU set. Static reference
/// data, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Store {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "availableSKUs")]
    pub available_skus: BTreeSet<String>,
}

/// Store identity without inventory, for responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoreSummary {
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Store> for StoreSummary {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            address: store.address.clone(),
            lat: store.lat,
            lon: store.lon,
        }
    }
}

/// Minimal pointer to another store stocking a missing item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoreRef {
    pub name: String,
    pub address: String,
}
