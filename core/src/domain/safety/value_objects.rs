use serde_json::Value;

/// Input to cart processing: normalized item names plus the profile
/// document to flag against.
#[derive(Debug, Clone)]
pub struct ProcessCartInput {
    pub items: Vec<String>,
    pub profile: Value,
}
