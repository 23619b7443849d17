use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jungmarker_contact::RelayError;
use serde_json::json;
use thiserror::Error;

/// Errors that fail a request. Every one of them is answered with a 500
/// carrying the underlying message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// The request body could not be read, e.g. it exceeds the body limit.
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        match &self {
            AppError::Relay(RelayError::InvalidPayload(e)) => {
                tracing::warn!(error = %e, "Invalid contact payload");
            }
            AppError::Relay(RelayError::Store(e)) => {
                tracing::error!(error = %e, "Contact submission failed");
            }
            AppError::Body(e) => {
                tracing::warn!(error = %e, "Could not read contact payload");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false, "error": message })),
        )
            .into_response()
    }
}
