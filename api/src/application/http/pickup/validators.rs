use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::cart::validators::CartItemInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct PickupSuggestionRequest {
    /// Cart entries: SKUs, item names, or objects with a `name` field.
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub cart: Vec<CartItemInput>,
}
