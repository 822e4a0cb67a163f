use std::future::Future;

use serde_json::Value;

use crate::domain::common::entities::app_errors::CoreError;

/// Single-slot storage for the latest profile document.
///
/// The document has no fixed schema; it is replaced wholesale with
/// all-or-nothing visibility and keeps no history.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<Option<Value>, CoreError>> + Send;

    fn save(&self, document: Value) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for profile parsing and storage.
pub trait ProfileService: Send + Sync {
    /// Parse free text into a structured profile document via the LLM,
    /// persist it as the latest profile, and return it.
    fn parse_profile(
        &self,
        user_input: String,
    ) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn get_profile(&self) -> impl Future<Output = Result<Value, CoreError>> + Send;

    fn clear_profile(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
