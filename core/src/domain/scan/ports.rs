use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, scan::entities::ScanReport};

/// Service trait for scanned-product analysis.
pub trait ScanService: Send + Sync {
    fn scan_product(&self, sku: &str)
    -> impl Future<Output = Result<ScanReport, CoreError>> + Send;
}
