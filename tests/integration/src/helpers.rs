//! Test helpers for integration tests
//!
//! Provides a stub chat server that records every status and settings
//! request, and can be told to reject them.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::routing::{patch, post};
use axum::{Json, Router};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as the stub server received it
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: &'static str,
    /// Decoded `email:api_key` from the basic auth header
    pub credentials: Option<String>,
    pub body: Value,
}

/// Canned failure returned for every request
#[derive(Debug, Clone)]
pub struct StubFailure {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Clone, Default)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    failure: Arc<Mutex<Option<StubFailure>>>,
}

/// Stub server instance that manages lifecycle
pub struct StubServer {
    pub addr: SocketAddr,
    state: StubState,
    _handle: JoinHandle<()>,
}

impl StubServer {
    /// Start a new stub server on a free local port
    pub async fn start() -> Result<Self> {
        let state = StubState::default();

        let app = Router::new()
            .route("/json/users/me/status", post(update_status))
            .route("/json/settings", patch(update_settings))
            .with_state(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(50)).await;

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Everything received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }

    /// Reject every following request with this status and JSON body
    pub fn fail_with(&self, status: StatusCode, body: Value) {
        *self.state.failure.lock() = Some(StubFailure {
            status,
            body: body.to_string(),
        });
    }

    /// Reject every following request with a non-JSON body
    pub fn fail_with_text(&self, status: StatusCode, body: &str) {
        *self.state.failure.lock() = Some(StubFailure {
            status,
            body: body.to_string(),
        });
    }
}

async fn update_status(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.record(Method::POST, "/json/users/me/status", &headers, body)
}

async fn update_settings(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.record(Method::PATCH, "/json/settings", &headers, body)
}

impl StubState {
    fn record(
        &self,
        method: Method,
        path: &'static str,
        headers: &HeaderMap,
        body: Value,
    ) -> (StatusCode, String) {
        self.requests.lock().push(RecordedRequest {
            method,
            path,
            credentials: basic_credentials(headers),
            body,
        });

        match self.failure.lock().clone() {
            Some(failure) => (failure.status, failure.body),
            None => (
                StatusCode::OK,
                json!({"result": "success", "msg": ""}).to_string(),
            ),
        }
    }
}

fn basic_credentials(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded).ok()?;
    String::from_utf8(decoded).ok()
}

/// Build the server's error envelope
pub fn error_body(msg: &str, code: &str) -> Value {
    json!({"result": "error", "msg": msg, "code": code})
}

/// Assert the stub received exactly one request and return it
pub fn single_request(server: &StubServer) -> Result<RecordedRequest> {
    let mut requests = server.requests();
    if requests.len() != 1 {
        anyhow::bail!("Expected 1 request, got {}: {requests:?}", requests.len());
    }
    Ok(requests.remove(0))
}
