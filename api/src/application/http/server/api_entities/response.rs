use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Thin success wrapper so handlers read `Response::OK(body)`.
#[derive(Debug)]
pub enum Response<T> {
    OK(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
        }
    }
}
