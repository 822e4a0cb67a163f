use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{generate_order_id, generate_timestamp},
    fulfillment::entities::StoreSummary,
};

/// One placed order. Append-only: orders are never updated or deleted.
///
/// The id is a random 10-character uppercase-alphanumeric string with no
/// collision checking; the birthday-bound risk is acknowledged, not
/// handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub order_id: String,
    #[schema(value_type = Vec<Object>)]
    pub cart: Vec<serde_json::Value>,
    pub quantities: BTreeMap<String, u32>,
    pub store: StoreSummary,
    pub pickup_code: String,
    /// Snapshot of the profile document at placement time.
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        cart: Vec<serde_json::Value>,
        quantities: BTreeMap<String, u32>,
        store: StoreSummary,
        pickup_code: String,
        profile: serde_json::Value,
    ) -> Self {
        Self {
            order_id: generate_order_id(),
            cart,
            quantities,
            store,
            pickup_code,
            profile,
            placed_at: generate_timestamp(),
        }
    }
}
