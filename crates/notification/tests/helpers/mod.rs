use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    Form, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tokio::net::TcpListener;

#[derive(Clone, Debug)]
pub struct SentForm {
    pub account_sid: String,
    pub authorization: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: String,
    sent: Arc<Mutex<Vec<SentForm>>>,
}

/// Stand-in for the Twilio messages endpoint.
pub struct MockTwilio {
    pub url: String,
    sent: Arc<Mutex<Vec<SentForm>>>,
}

impl MockTwilio {
    pub fn sent(&self) -> Vec<SentForm> {
        self.sent.lock().unwrap().clone()
    }
}

async fn create_message(
    State(reply): State<Reply>,
    Path(account_sid): Path<String>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    reply.sent.lock().unwrap().push(SentForm {
        account_sid,
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        fields,
    });

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

pub async fn spawn(status: StatusCode, body: impl Into<String>) -> MockTwilio {
    let sent = Arc::new(Mutex::new(vec![]));
    let reply = Reply {
        status,
        body: body.into(),
        sent: sent.clone(),
    };

    let app = Router::new()
        .route(
            "/2010-04-01/Accounts/{account_sid}/Messages.json",
            post(create_message),
        )
        .with_state(reply);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockTwilio {
        url: format!("http://127.0.0.1:{port}/2010-04-01"),
        sent,
    }
}
