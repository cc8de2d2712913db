//! OS signal handling.
//!
//! Translates Ctrl-C (SIGINT) into the internal shutdown signal so the
//! server can drain in-flight requests before exiting.

use std::sync::Arc;

use crate::lifecycle::Shutdown;

/// Spawn a task that triggers `shutdown` when Ctrl-C is received.
pub fn shutdown_on_ctrl_c(shutdown: Arc<Shutdown>) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            return;
        }
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });
}
