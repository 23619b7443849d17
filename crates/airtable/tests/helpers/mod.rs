use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// Stand-in for the Airtable API answering every request with a fixed reply.
pub struct MockApi {
    pub url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl MockApi {
    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn handler(
    State(reply): State<Reply>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    reply.captured.lock().unwrap().push(Captured {
        method,
        path: uri.path().to_owned(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

pub async fn spawn(status: StatusCode, body: impl Into<String>) -> MockApi {
    let captured = Arc::new(Mutex::new(vec![]));
    let reply = Reply {
        status,
        body: body.into(),
        captured: captured.clone(),
    };

    let app = Router::new().fallback(handler).with_state(reply);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi {
        url: format!("http://127.0.0.1:{port}/v0"),
        captured,
    }
}
