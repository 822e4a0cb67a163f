use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    catalog::entities::Product,
    fulfillment::entities::{StoreRef, StoreSummary},
};

/// Outcome of one store selection run.
///
/// `packed_items` and `missing_items` partition the resolved cart SKUs:
/// their union is exactly the resolved set and they are disjoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PickupSuggestion {
    pub store: Option<StoreSummary>,
    pub packed_items: Vec<Product>,
    pub missing_items: Vec<Product>,
    pub not_found_items: Vec<String>,
    pub pickup_code: String,
    /// Missing-item name to the first other store stocking it.
    pub nearest_stores_for_missing: BTreeMap<String, StoreRef>,
}
