use std::collections::HashMap;
use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    safety::{entities::CartEntry, entities::Substitution, value_objects::ProcessCartInput},
};

/// Static allergen synonym groups: canonical term to equivalent or
/// related terms.
#[cfg_attr(test, mockall::automock)]
pub trait SynonymRepository: Send + Sync {
    fn table(&self) -> impl Future<Output = Result<HashMap<String, Vec<String>>, CoreError>> + Send;
}

/// Static item-name to substitution table. Lookup is exact on the
/// lower-cased name; no approximate matching here.
#[cfg_attr(test, mockall::automock)]
pub trait SubstitutionRepository: Send + Sync {
    fn get(
        &self,
        item_name: &str,
    ) -> impl Future<Output = Result<Option<Substitution>, CoreError>> + Send;
}

/// Service trait for classifying a shopping list against a profile.
pub trait CartService: Send + Sync {
    /// Classify every item independently; one item's failure to resolve
    /// never aborts the rest.
    fn process_cart(
        &self,
        input: ProcessCartInput,
    ) -> impl Future<Output = Result<Vec<CartEntry>, CoreError>> + Send;
}
