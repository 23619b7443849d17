use axum::{Router, http::StatusCode, routing::post};
use jungmarker_contact::Relay;

mod contact;

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

pub async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(contact::action).fallback(fallback))
        .fallback(fallback)
        .layer(axum::middleware::from_fn(
            crate::middleware::cors_middleware,
        ))
        .with_state(app_state)
}
