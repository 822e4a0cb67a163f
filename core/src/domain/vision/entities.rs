use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of one image detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VisionReport {
    /// Lower-cased allergen terms parsed from the model's
    /// comma-separated answer. May be empty.
    pub identified_allergens: Vec<String>,
    /// Consumer-readable report composed by the follow-up model call.
    pub summary: String,
}
