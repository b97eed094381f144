//! Mapping of classification failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cliptag_core::ClassifyError;
use serde_json::json;

/// A rejected request. Rendered as `{"detail": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub ClassifyError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ClassifyError::InvalidTopK { .. } => StatusCode::BAD_REQUEST,
            ClassifyError::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Classification failed: {}", self.0);
        } else {
            tracing::warn!("Rejected request: {}", self.0);
        }
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}
