use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fulfillment::{entities::Store, value_objects::PickupSuggestion},
};

/// Read-only access to the store roster.
///
/// Implementations must return stores in lexicographic name order so
/// that selection ties break deterministically.
#[cfg_attr(test, mockall::automock)]
pub trait StoreRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Store>, CoreError>> + Send;
}

/// Service trait for pickup-store selection.
pub trait PickupService: Send + Sync {
    fn suggest_pickup(
        &self,
        items: Vec<String>,
    ) -> impl Future<Output = Result<PickupSuggestion, CoreError>> + Send;
}
