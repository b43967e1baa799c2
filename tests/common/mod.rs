#![allow(dead_code)]

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderMap, Method},
    middleware::{self, Next},
    response::Response,
    Router,
};
use session_gateway::{build_router, GatewayState};
use session_gateway::shared::constants::DEFAULT_MAX_BODY_BYTES;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// One request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedCall {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("backend received non-JSON body")
    }
}

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<RecordedCall>>>);

impl CallLog {
    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn last(&self) -> RecordedCall {
        self.0
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("backend was never called")
    }

    fn push(&self, call: RecordedCall) {
        self.0.lock().unwrap().push(call);
    }
}

async fn record(State(log): State<CallLog>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();

    log.push(RecordedCall {
        method: parts.method.clone(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers.clone(),
        body: body.clone(),
    });

    next.run(Request::from_parts(parts, Body::from(body))).await
}

pub struct MockBackend {
    pub url: String,
    pub log: CallLog,
}

/// Serve `routes` on an ephemeral port, recording every call
pub async fn spawn_backend(routes: Router) -> MockBackend {
    let log = CallLog::default();
    let app = routes.layer(middleware::from_fn_with_state(log.clone(), record));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend { url, log }
}

/// Serve the gateway in front of `backend_url`; returns its base URL
pub async fn spawn_gateway(backend_url: &str) -> String {
    spawn_gateway_with_limit(backend_url, DEFAULT_MAX_BODY_BYTES).await
}

/// Same as [`spawn_gateway`] with a custom request body limit
pub async fn spawn_gateway_with_limit(backend_url: &str, max_body_bytes: usize) -> String {
    let app = build_router(GatewayState::new(backend_url), max_body_bytes);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    url
}

/// A local address with nothing listening on it
pub async fn unreachable_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    url
}

pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}

pub fn set_cookies(response: &reqwest::Response) -> Vec<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
