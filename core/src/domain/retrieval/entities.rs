use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One in-stock candidate returned by the similarity-alternatives service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub allergens: Vec<String>,
}
