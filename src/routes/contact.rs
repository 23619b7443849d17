use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::IntoResponse,
};
use jungmarker_contact::ContactSubmission;
use serde_json::json;

use crate::{error::AppError, routes::AppState};

/// Accepts a contact form post. Answers once the lead is stored; email and
/// SMS notifications keep running after the response is sent.
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, AppError> {
    let submission = ContactSubmission::from_json(&body?)?;

    app_state.relay.submit(submission).await?;

    Ok(Json(json!({ "ok": true })))
}
