use std::future::Future;

use crate::domain::{catalog::entities::Product, common::entities::app_errors::CoreError};

/// Read-only access to the product catalog.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    fn list(&self) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    /// Exact match on the lower-cased product name.
    fn get_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    /// Exact match on SKU. Never falls back to approximate matching.
    fn get_by_sku(
        &self,
        sku: &str,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;
}
