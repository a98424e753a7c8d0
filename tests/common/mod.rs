//! In-process stub of the next-move statistics service.
//!
//! Serves `GET /api/nextmove/{key}` from programmable canned bodies, with
//! per-key failure injection, artificial latency, and hit counters.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

#[derive(Clone, Default)]
pub struct StubService {
    inner: Arc<StubInner>,
}

#[derive(Default)]
struct StubInner {
    bodies: Mutex<HashMap<String, String>>,
    failures_left: Mutex<HashMap<String, u32>>,
    delays_ms: Mutex<HashMap<String, u64>>,
    hits: Mutex<HashMap<String, u32>>,
}

impl StubService {
    /// Set the JSON body served for a key.
    pub fn set_body(&self, key: &str, body: &str) {
        self.inner
            .bodies
            .lock()
            .unwrap()
            .insert(key.to_string(), body.to_string());
    }

    /// Make the next `n` requests for a key answer HTTP 500.
    pub fn fail_next(&self, key: &str, n: u32) {
        self.inner
            .failures_left
            .lock()
            .unwrap()
            .insert(key.to_string(), n);
    }

    /// Delay responses for a key.
    pub fn set_delay_ms(&self, key: &str, ms: u64) {
        self.inner
            .delays_ms
            .lock()
            .unwrap()
            .insert(key.to_string(), ms);
    }

    /// How many requests a key has received.
    pub fn hits(&self, key: &str) -> u32 {
        self.inner
            .hits
            .lock()
            .unwrap()
            .get(key)
            .copied()
            .unwrap_or(0)
    }

    async fn respond(&self, key: String) -> Response {
        *self
            .inner
            .hits
            .lock()
            .unwrap()
            .entry(key.clone())
            .or_insert(0) += 1;

        let delay = self.inner.delays_ms.lock().unwrap().get(&key).copied();
        if let Some(ms) = delay {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        let failing = {
            let mut failures = self.inner.failures_left.lock().unwrap();
            match failures.get_mut(&key) {
                Some(left) if *left > 0 => {
                    *left -= 1;
                    true
                }
                _ => false,
            }
        };
        if failing {
            return (StatusCode::INTERNAL_SERVER_ERROR, "stub failure").into_response();
        }

        let body = self
            .inner
            .bodies
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| r#"{"message": "No data found"}"#.to_string());

        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response()
    }
}

async fn nextmove(State(stub): State<StubService>, Path(key): Path<String>) -> Response {
    stub.respond(key).await
}

async fn nextmove_opening(State(stub): State<StubService>) -> Response {
    stub.respond(String::new()).await
}

/// Start the stub on an ephemeral port. Returns the handle and the base URL
/// to point `ExplorerConfig::api_base_url` at.
pub async fn spawn_stub() -> (StubService, String) {
    let stub = StubService::default();

    let app = Router::new()
        .route("/api/nextmove/", get(nextmove_opening))
        .route("/api/nextmove/{key}", get(nextmove))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server error");
    });

    (stub, format!("http://{addr}/api"))
}

/// Explorer configuration pointed at the stub, tuned for fast tests.
pub fn test_config(base_url: &str) -> explorer::ExplorerConfig {
    explorer::ExplorerConfig {
        api_base_url: base_url.to_string(),
        request_timeout_secs: 5,
        retry_attempts: 3,
        retry_backoff_ms: 10,
        cache_capacity: 64,
        cache_snapshot_path: None,
    }
}
