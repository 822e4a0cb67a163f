use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, retrieval::entities::AlternativeItem};

/// Similarity search over the alternatives index.
///
/// Enrichment only: callers must tolerate failures and empty results,
/// never depend on this for correctness.
#[cfg_attr(test, mockall::automock)]
pub trait AlternativesIndex: Send + Sync {
    /// Ranked in-stock items similar to `query`, excluding items that
    /// contain `exclude_allergen`.
    fn find_alternatives(
        &self,
        query: &str,
        exclude_allergen: &str,
        top_k: usize,
    ) -> impl Future<Output = Result<Vec<AlternativeItem>, CoreError>> + Send;
}
