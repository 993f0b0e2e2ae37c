//! In-process stub endpoints for exercising registry lookups and uploads
//! without touching the network.
//!
//! Every request lands in one fallback handler that records it and answers
//! with the canned response registered for its exact (still percent-encoded)
//! path. Unregistered paths answer 404.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Header names are lowercased.
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, StubResponse>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Serve `routes` (exact path → response) over plain HTTP.
    pub async fn start(routes: Vec<(&str, StubResponse)>) -> Self {
        let (state, app) = stub_app(routes);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        let handle =
            tokio::spawn(async move { axum::serve(listener, app).await.expect("serve stub") });

        Self {
            base_url: format!("http://{}", addr),
            requests: state.requests,
            handle,
        }
    }

    /// Serve `routes` over HTTPS with a freshly generated self-signed
    /// certificate for `localhost` / `127.0.0.1`.
    pub async fn start_tls(routes: Vec<(&str, StubResponse)>) -> Self {
        let (state, app) = stub_app(routes);

        let cert = rcgen::generate_simple_self_signed(vec![
            "localhost".to_string(),
            "127.0.0.1".to_string(),
        ])
        .expect("self-signed certificate");
        let tls = RustlsConfig::from_pem(
            cert.cert.pem().into_bytes(),
            cert.key_pair.serialize_pem().into_bytes(),
        )
        .await
        .expect("rustls config");

        let server_handle = Handle::new();
        let bind_addr: SocketAddr = "127.0.0.1:0".parse().expect("bind addr");
        let handle = tokio::spawn({
            let server_handle = server_handle.clone();
            async move {
                axum_server::bind_rustls(bind_addr, tls)
                    .handle(server_handle)
                    .serve(app.into_make_service())
                    .await
                    .expect("serve tls stub");
            }
        });
        let addr = server_handle.listening().await.expect("tls stub listening");

        Self {
            base_url: format!("https://{}", addr),
            requests: state.requests,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Address on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn stub_app(routes: Vec<(&str, StubResponse)>) -> (StubState, Router) {
    let state = StubState {
        routes: Arc::new(
            routes
                .into_iter()
                .map(|(path, response)| (path.to_string(), response))
                .collect(),
        ),
        requests: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new().fallback(respond).with_state(state.clone());
    (state, app)
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let response = state.routes.get(&path).cloned();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path,
        headers: headers
            .iter()
            .map(|(name, value)| {
                let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
                (name.as_str().to_string(), value)
            })
            .collect(),
        body: body.to_vec(),
    });

    let Some(response) = response else {
        let body = r#"{"error":"Not found"}"#;
        return (StatusCode::NOT_FOUND, [(header::CONTENT_TYPE, "application/json")], body)
            .into_response();
    };

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], response.body).into_response()
}
