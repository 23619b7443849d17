#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::{Method, Request, StatusCode, header},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use jungmarker::{AppState, routes};
use jungmarker_contact::{
    LeadStore, Relay,
    memory::{MemoryMailer, MemorySms, MemoryStore, SentSms},
};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub mailer: MemoryMailer,
    pub sms: MemorySms,
}

impl TestApp {
    pub async fn request(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Response) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, Response { headers, body })
    }

    /// Waits for the detached notification task to hand over `count` texts.
    pub async fn wait_for_sms(&self, count: usize) -> Vec<SentSms> {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let sent = self.sms.sent().await;
                if sent.len() >= count {
                    return sent;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("SMS was not sent in time")
    }
}

pub struct Response {
    pub headers: axum::http::HeaderMap,
    pub body: Bytes,
}

impl Response {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub fn app_with(store: impl LeadStore + 'static, mailer: MemoryMailer, sms: MemorySms) -> TestApp {
    let relay = Relay::new(
        Arc::new(store),
        Arc::new(mailer.clone()),
        Some(Arc::new(sms.clone())),
    );

    TestApp {
        router: routes::router(AppState { relay }),
        mailer,
        sms,
    }
}

pub fn app() -> TestApp {
    app_with(MemoryStore::new(), MemoryMailer::new(), MemorySms::new())
}

pub fn contact_body(name: &str, phone: &str, intent: &str) -> String {
    serde_json::json!({
        "name": name,
        "email": "jane@x.com",
        "phone": phone,
        "intent": intent,
        "message": "test",
    })
    .to_string()
}

#[derive(Clone)]
struct Reply {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

/// Stand-in for the Airtable API.
pub struct MockAirtable {
    pub api_url: String,
    received: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl MockAirtable {
    pub fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn create_record(State(reply): State<Reply>, body: Bytes) -> impl IntoResponse {
    if let Ok(value) = serde_json::from_slice(&body) {
        reply.received.lock().unwrap().push(value);
    }

    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

pub async fn spawn_airtable(status: StatusCode, body: &'static str) -> MockAirtable {
    let received = Arc::new(Mutex::new(vec![]));
    let reply = Reply {
        status,
        body,
        received: received.clone(),
    };

    let app = Router::new().fallback(create_record).with_state(reply);
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockAirtable {
        api_url: format!("http://127.0.0.1:{port}/v0"),
        received,
    }
}
