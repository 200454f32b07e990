//! Scriptable local backend for tests.
//!
//! [`MockBackend`] binds `127.0.0.1:0`, answers every request through a
//! handler closure, and records what it received. Dropping it stops the
//! server thread.

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use serde_json::Value;

/// A request as seen by the mock backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl MockRequest {
    /// Body parsed as JSON, if it is JSON.
    #[must_use]
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Decoded value of a query-string parameter.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == key).then(|| {
                urlencoding::decode(v).map_or_else(|_| v.to_string(), std::borrow::Cow::into_owned)
            })
        })
    }

    /// Whether a multipart body carries a field with this name.
    #[must_use]
    pub fn has_form_field(&self, name: &str) -> bool {
        self.body.contains(&format!("name=\"{name}\""))
    }
}

/// A scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    #[must_use]
    pub fn json(status: u16, value: &Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }

    #[must_use]
    pub fn ok(value: &Value) -> Self {
        Self::json(200, value)
    }

    /// Error reply shaped like the backend's `{"detail": ...}`.
    #[must_use]
    pub fn detail(status: u16, message: &str) -> Self {
        Self::json(status, &serde_json::json!({ "detail": message }))
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::detail(404, "Not Found")
    }
}

/// One `(method, path) → response` entry for [`MockBackend::routes`].
#[derive(Debug, Clone)]
pub struct MockRoute {
    pub method: &'static str,
    pub path: &'static str,
    pub response: MockResponse,
}

impl MockRoute {
    #[must_use]
    pub const fn new(method: &'static str, path: &'static str, response: MockResponse) -> Self {
        Self {
            method,
            path,
            response,
        }
    }
}

type Handler = dyn Fn(&MockRequest) -> MockResponse + Send + Sync;

/// Local HTTP server driven by a handler closure.
pub struct MockBackend {
    server: Arc<tiny_http::Server>,
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<MockRequest>>>,
    worker: Option<JoinHandle<()>>,
}

impl MockBackend {
    /// Start a backend answering every request with `handler`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the listener cannot be bound.
    pub fn start<F>(handler: F) -> std::io::Result<Self>
    where
        F: Fn(&MockRequest) -> MockResponse + Send + Sync + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").map_err(std::io::Error::other)?;
        let addr = server
            .server_addr()
            .to_ip()
            .ok_or_else(|| std::io::Error::other("mock backend is not bound to an IP address"))?;
        let server = Arc::new(server);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Arc<Handler> = Arc::new(handler);

        let worker = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            std::thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let recorded = record(&mut request);
                    let reply = handler(&recorded);
                    requests
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(recorded);
                    let mut response =
                        tiny_http::Response::from_string(reply.body).with_status_code(reply.status);
                    if let Ok(header) =
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    {
                        response.add_header(header);
                    }
                    if let Err(e) = request.respond(response) {
                        tracing::debug!(error = %e, "mock backend failed to respond");
                    }
                }
            })
        };

        Ok(Self {
            server,
            addr,
            requests,
            worker: Some(worker),
        })
    }

    /// Start a backend with a fixed route table. Unmatched requests get 404.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the listener cannot be bound.
    pub fn routes(routes: Vec<MockRoute>) -> std::io::Result<Self> {
        Self::start(move |req| {
            routes
                .iter()
                .find(|r| r.method.eq_ignore_ascii_case(&req.method) && r.path == req.path)
                .map_or_else(MockResponse::not_found, |r| r.response.clone())
        })
    }

    /// Base URL to hand to [`crate::ApiClient::new`].
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A base URL on which nothing is listening.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if no free port could be found.
    pub fn unreachable_url() -> std::io::Result<String> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);
        Ok(format!("http://{addr}"))
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn record(request: &mut tiny_http::Request) -> MockRequest {
    let (path, query) = match request.url().split_once('?') {
        Some((path, query)) => (path.to_string(), Some(query.to_string())),
        None => (request.url().to_string(), None),
    };
    let content_type = request
        .headers()
        .iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_string());
    let mut raw = Vec::new();
    if let Err(e) = request.as_reader().read_to_end(&mut raw) {
        tracing::debug!(error = %e, "mock backend could not read request body");
    }
    MockRequest {
        method: request.method().to_string(),
        path,
        query,
        content_type,
        body: String::from_utf8_lossy(&raw).into_owned(),
    }
}
