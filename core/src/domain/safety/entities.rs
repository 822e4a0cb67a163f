use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-item classification outcome, in ascending severity of handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CartStatus {
    Safe,
    Warn,
    Risk,
    Substituted,
}

/// One classified shopping-list item. Exists only within a single
/// request/response cycle.
///
/// Invariant: `status == Substituted` implies `safe_alternative` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartEntry {
    pub original: String,
    pub status: CartStatus,
    #[serde(rename = "safeAlternative")]
    pub safe_alternative: Option<String>,
    pub reason: String,
}

/// Static substitution record: a safe alternative plus a human-readable
/// reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Substitution {
    #[serde(rename = "safeAlt")]
    pub safe_alt: String,
    pub reason: String,
}
