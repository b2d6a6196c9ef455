//! In-process upstream used by adapter tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;

/// What the mock upstream saw on its last call
#[derive(Debug, Clone, Default)]
pub struct Captured {
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: String,
    captured: Arc<Mutex<Option<Captured>>>,
}

/// Start a mock provider answering every POST with `status` and `reply`.
/// Returns its URL and a handle to the captured request.
pub async fn spawn_upstream(status: u16, reply: &str) -> (String, Arc<Mutex<Option<Captured>>>) {
    let captured = Arc::new(Mutex::new(None));
    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        reply: reply.to_string(),
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/translate", post(record))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/translate", addr), captured)
}

async fn record(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    };
    *state.captured.lock().unwrap() = Some(Captured {
        query,
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });
    (state.status, state.reply.clone())
}

/// URL of a loopback port nothing listens on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/translate", addr)
}
