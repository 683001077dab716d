use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gmn_core::Error;
use serde_json::json;

/// A failed request on the wire: status code plus a short
/// human-readable message. Internal detail stays in the logs.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Maps a pipeline failure. `fallback` is the client-facing message
    /// for anything internal, so transport and parse errors never leak
    /// their detail.
    pub fn from_error(err: Error, fallback: &str) -> Self {
        match err {
            Error::Validation(message) => Self::bad_request(message),
            Error::Upstream(status) => {
                Self::new(StatusCode::BAD_GATEWAY, format!("Upstream {status}"))
            }
            Error::Extraction => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Unable to parse article")
            }
            _ => Self::new(StatusCode::INTERNAL_SERVER_ERROR, fallback),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
