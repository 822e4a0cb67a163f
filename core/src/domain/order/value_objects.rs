use std::collections::BTreeMap;

use crate::domain::fulfillment::entities::StoreSummary;

#[derive(Debug, Clone)]
pub struct PlaceOrderInput {
    pub cart: Vec<serde_json::Value>,
    pub quantities: BTreeMap<String, u32>,
    pub store: Option<StoreSummary>,
    pub pickup_code: Option<String>,
    pub profile: serde_json::Value,
}
