use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// LLM client trait for calling AI models.
///
/// All calls are blocking round-trips with a bounded timeout; transport
/// failures surface as [`CoreError::UpstreamFailure`] and are never
/// retried here.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Free-form text generation. The returned text may carry markdown
    /// fences or surrounding prose; callers own the cleanup.
    fn generate_text(&self, prompt: String) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Generation constrained to a JSON response schema.
    fn generate_json(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Free-form text generation over an inline image.
    fn generate_text_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
