//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with its catch-all binding
//! - Wire up middleware (request ID, tracing)
//! - Serve until the shutdown coordinator fires
//!
//! # Design Decisions
//! - A single catch-all route: the relay treats every method and path
//!   identically, so there is no routing table
//! - The egress client lives in shared state; handlers clone it cheaply
//!   and all clones share one connection pool

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::relay::relay_handler;
use crate::lifecycle::Shutdown;

/// Shared state injected into the relay handler.
#[derive(Clone)]
pub struct RelayState {
    /// Immutable configuration, loaded once at startup.
    pub config: Arc<RelayConfig>,
    /// The shared egress client. Constructed exactly once.
    pub client: reqwest::Client,
}

/// The relay's HTTP server.
pub struct RelayServer {
    router: Router,
}

impl RelayServer {
    /// Assemble the router from validated configuration and the shared
    /// egress client.
    pub fn new(config: Arc<RelayConfig>, client: reqwest::Client) -> Self {
        let state = RelayState { config, client };

        let router = Router::new()
            .route("/", any(relay_handler))
            .route("/{*path}", any(relay_handler))
            .with_state(state)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::debug_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                }),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

        Self { router }
    }

    /// Run the server on the given listener until shutdown is
    /// triggered.
    pub async fn run(self, listener: TcpListener, shutdown: Arc<Shutdown>) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Relay listening");

        let mut rx = shutdown.subscribe();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = rx.recv().await;
            })
            .await?;

        tracing::info!("Relay stopped");
        Ok(())
    }
}
