use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::IntoResponse,
};
use cartwise_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

/// HTTP-facing error: one variant per kind in the core taxonomy. Every
/// request fails independently; nothing here is fatal to the process.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UpstreamFailure(String),

    #[error("{0}")]
    ParseFailure(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation(_) => "validation_error",
            ApiError::UpstreamFailure(_) => "upstream_failure",
            ApiError::ParseFailure(_) => "parse_failure",
            ApiError::InternalServerError(_) => "internal_server_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamFailure(_) | ApiError::ParseFailure(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound(message) => ApiError::NotFound(format!("{message} not found")),
            CoreError::Validation(message) => ApiError::Validation(message),
            CoreError::UpstreamFailure(message) => ApiError::UpstreamFailure(message),
            CoreError::ParseFailure(message) => ApiError::ParseFailure(message),
            CoreError::Internal(message) => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ApiErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// JSON extractor that also runs `validator` rules, rejecting with a
/// 400 `validation_error` body.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        payload
            .validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        Ok(Self(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("profile".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Validation("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UpstreamFailure("x".to_string()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::ParseFailure("x".to_string()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::InternalServerError("x".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_core_error_kinds_carry_over() {
        let api: ApiError = CoreError::ParseFailure("bad payload".to_string()).into();
        assert!(matches!(api, ApiError::ParseFailure(_)));

        let api: ApiError = CoreError::NotFound("profile".to_string()).into();
        assert!(matches!(api, ApiError::NotFound(_)));
    }
}
