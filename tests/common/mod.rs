//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use http_relay::config::RelayConfig;
use http_relay::egress;
use http_relay::http::RelayServer;
use http_relay::lifecycle::Shutdown;

/// What a mock upstream observed about one inbound request.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub uri: String,
    pub body: String,
    pub content_type: Option<String>,
    pub accept: Option<String>,
}

/// Spawn an axum router on an ephemeral local port.
pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// An upstream that records every request and answers `{"ok":true}`.
pub fn recording_router(tx: mpsc::UnboundedSender<RecordedRequest>) -> Router {
    Router::new().fallback(move |request: Request<Body>| {
        let tx = tx.clone();
        async move {
            let (parts, body) = request.into_parts();
            let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
            let header_text = |name: header::HeaderName| {
                parts
                    .headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned)
            };
            let _ = tx.send(RecordedRequest {
                method: parts.method.to_string(),
                uri: parts.uri.to_string(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
                content_type: header_text(header::CONTENT_TYPE),
                accept: header_text(header::ACCEPT),
            });
            (
                [(header::CONTENT_TYPE, "application/json")],
                r#"{"ok":true}"#,
            )
        }
    })
}

/// An upstream that always answers with the given status and body.
pub fn fixed_router(status: StatusCode, body: &'static str) -> Router {
    Router::new().fallback(move || async move {
        (status, [(header::CONTENT_TYPE, "application/json")], body)
    })
}

/// Spawn the relay itself on an ephemeral port.
///
/// Returns the listen address and the shutdown coordinator used to
/// stop the server.
pub async fn spawn_relay(config: RelayConfig) -> (SocketAddr, Arc<Shutdown>) {
    let (addr, shutdown, _handle) = spawn_relay_with_handle(config).await;
    (addr, shutdown)
}

/// Like [`spawn_relay`] but also returns the server task handle so
/// tests can observe shutdown completing.
pub async fn spawn_relay_with_handle(
    mut config: RelayConfig,
) -> (SocketAddr, Arc<Shutdown>, tokio::task::JoinHandle<()>) {
    let proxy = egress::proxy_url::build(
        &config.proxy_url,
        &config.proxy_username,
        &config.proxy_password,
    )
    .unwrap();
    let client = egress::build_client(proxy).unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.app_port = addr.port();

    let shutdown = Arc::new(Shutdown::new());
    let server = RelayServer::new(Arc::new(config), client);

    let server_shutdown = shutdown.clone();
    let handle = tokio::spawn(async move {
        server.run(listener, server_shutdown).await.unwrap();
    });

    (addr, shutdown, handle)
}
