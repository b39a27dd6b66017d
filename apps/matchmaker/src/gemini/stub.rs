//! In-process stand-in for the Gemini API, served on an ephemeral local port.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    http::{header, HeaderMap, StatusCode, Uri},
    Router,
};
use serde_json::Value;

#[derive(Debug, Clone)]
pub(crate) struct StubResponse {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl StubResponse {
    pub(crate) fn new(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub(crate) fn ok(body: &str) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Captured(Arc<Mutex<Vec<CapturedRequest>>>);

impl Captured {
    pub(crate) fn requests(&self) -> Vec<CapturedRequest> {
        self.0.lock().unwrap().clone()
    }
}

/// Serves `response` for every request and records what was sent.
pub(crate) async fn spawn_stub(response: StubResponse) -> (String, Captured) {
    let captured = Captured::default();
    let recorder = captured.clone();

    let app = Router::new().fallback(move |uri: Uri, headers: HeaderMap, body: Bytes| {
        let recorder = recorder.clone();
        let response = response.clone();
        async move {
            recorder.0.lock().unwrap().push(CapturedRequest {
                path: uri.path().to_string(),
                api_key: headers
                    .get("x-goog-api-key")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
                body: serde_json::from_slice(&body).unwrap_or(Value::Null),
            });
            tokio::time::sleep(response.delay).await;
            (
                response.status,
                [(header::CONTENT_TYPE, "application/json")],
                response.body,
            )
        }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), captured)
}

/// A base URL nothing is listening on.
pub(crate) async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
