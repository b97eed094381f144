//! Route handlers.

use axum::extract::State;
use axum::Json;
use cliptag_core::{ClassifyRequest, ClassifyResponse, StatusMessage};

use super::error::ApiError;
use super::AppState;

/// Body of `GET /`.
pub const STATUS_MESSAGE: &str = "CLIP Demo Server is running";

/// `GET /` - fixed liveness message.
pub async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: STATUS_MESSAGE.to_string(),
    })
}

/// `POST /classify` - random tags for the image, highest score first.
pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let response = state.classifier.classify(&request).await?;
    Ok(Json(response))
}
