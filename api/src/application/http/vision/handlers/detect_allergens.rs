use axum::extract::{Multipart, State};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use cartwise_core::domain::vision::{entities::VisionReport, ports::VisionService};

/// Pull the uploaded image out of the multipart body and reject
/// non-image or corrupt uploads before spending an LLM call.
async fn read_image_field(mut multipart: Multipart) -> Result<(Vec<u8>, String), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_default();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        return Ok((data.to_vec(), content_type));
    }

    Err(ApiError::Validation("missing file field".to_string()))
}

#[utoipa::path(
    post,
    path = "/vision/detect",
    tag = "vision",
    summary = "Detect allergens in a food image",
    description = "Runs the vision model over an uploaded image (multipart field `file`), enriches each detected allergen with in-stock alternatives, and composes a report",
    responses(
        (status = 200, body = VisionReport),
        (status = 400, description = "Missing, non-image, or corrupt upload")
    )
)]
pub async fn detect_allergens(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response<VisionReport>, ApiError> {
    let (data, content_type) = read_image_field(multipart).await?;

    if !content_type.starts_with("image/") {
        return Err(ApiError::Validation(
            "invalid file type, please upload an image".to_string(),
        ));
    }
    if image::guess_format(&data).is_err() {
        return Err(ApiError::Validation(
            "could not process image file, it might be corrupted".to_string(),
        ));
    }

    let report = state
        .service
        .detect_allergens(data, content_type)
        .await
        .map_err(ApiError::from)?;

    *state.latest_vision_report.write().await = Some(report.clone());

    Ok(Response::OK(report))
}
