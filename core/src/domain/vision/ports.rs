use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, vision::entities::VisionReport};

/// Service trait for image-based allergen detection.
pub trait VisionService: Send + Sync {
    fn detect_allergens(
        &self,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> impl Future<Output = Result<VisionReport, CoreError>> + Send;
}
