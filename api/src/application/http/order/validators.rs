use std::collections::BTreeMap;

use cartwise_core::domain::fulfillment::entities::StoreSummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PlaceOrderRequest {
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub cart: Vec<serde_json::Value>,
    #[serde(default)]
    pub quantities: BTreeMap<String, u32>,
    pub store: Option<StoreSummary>,
    pub pickup_code: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub profile: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_payload_deserializes() {
        let request: PlaceOrderRequest = serde_json::from_value(json!({
            "cart": ["peanut butter"],
            "store": {"name": "Store A", "address": "1 Main St", "lat": 0.0, "lon": 0.0},
            "pickup_code": "A1B2C3D4"
        }))
        .unwrap();

        assert_eq!(request.cart.len(), 1);
        assert!(request.quantities.is_empty());
        assert!(request.profile.is_null());
    }
}
