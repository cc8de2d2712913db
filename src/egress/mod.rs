//! Egress transport subsystem.
//!
//! # Data Flow
//! ```text
//! RelayConfig (proxy_url, proxy_username, proxy_password)
//!     → proxy_url.rs (normalize, embed credentials, enforce rules)
//!     → client.rs (shared reqwest client: direct or proxied, HTTP/1.1)
//!     → cloned into RelayState for every request
//! ```
//!
//! # Design Decisions
//! - Proxy URL construction failures are fatal at boot, never at
//!   request time
//! - One client for the process lifetime; per-request clients would
//!   defeat connection pooling

pub mod client;
pub mod proxy_url;

pub use client::{build_client, EgressError};
pub use proxy_url::ProxyUrlError;
