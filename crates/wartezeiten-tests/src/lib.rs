//! Integration test support for the Wartezeiten client.
//!
//! Tests run against an in-process mock of the Wartezeiten API. The mock
//! answers every request with a fixed status and body and records the path
//! and headers it received, so tests can assert on both sides of the call.

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri, header};
use axum::response::IntoResponse;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use wartezeiten_client::{ClientConfig, WartezeitenClient};

pub use axum::http::StatusCode;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method.
    pub method: String,
    /// Request path, without query string.
    pub path: String,
    /// Request headers, names lowercased.
    pub headers: HashMap<String, String>,
}

impl RecordedRequest {
    /// Returns the value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Mock Wartezeiten API bound to a random local port.
///
/// The server task is aborted when the mock is dropped.
pub struct MockApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockApi {
    /// Starts a mock answering every request with `status` and `body`.
    ///
    /// # Errors
    /// Returns error if the listener cannot be bound.
    pub async fn start(status: StatusCode, body: impl Into<String>) -> std::io::Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: Arc::new(body.into()),
            requests: Arc::clone(&requests),
        };

        let app = Router::new().fallback(record).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    /// Starts a mock answering `200 OK` with `value` serialized as JSON.
    ///
    /// # Errors
    /// Returns error if the listener cannot be bound or `value` cannot be serialized.
    pub async fn json<T: Serialize>(value: &T) -> std::io::Result<Self> {
        let body = serde_json::to_string(value)?;
        Self::start(StatusCode::OK, body).await
    }

    /// Base URL of the mock, e.g. `http://127.0.0.1:41234`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Creates a client targeting the mock.
    ///
    /// # Errors
    /// Returns error if client creation fails.
    pub fn client(&self) -> Result<WartezeitenClient, wartezeiten_client::Error> {
        WartezeitenClient::new(ClientConfig {
            base_url: self.base_url(),
            ..Default::default()
        })
    }

    /// All requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    state.requests.lock().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_string(),
    )
}
