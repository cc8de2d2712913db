//! Transparent HTTP relay.
//!
//! Accepts arbitrary inbound HTTP requests on a local port, re-issues
//! each one unchanged (method, path, query, body) against a configured
//! upstream target, optionally routing egress through a forward proxy
//! (HTTP or SOCKS5, with embedded credentials), and returns the
//! upstream body verbatim. Any failure is reported inline as a JSON
//! `{"error": "..."}` envelope.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │                  RELAY                    │
//!   Client Request   │  ┌────────┐   ┌─────────┐   ┌──────────┐ │
//!   ─────────────────┼─▶│  http  │──▶│  relay  │──▶│  egress  │─┼──▶ Target
//!                    │  │ server │   │ handler │   │  client  │ │    (direct or
//!   Client Response  │  └────────┘   └─────────┘   └──────────┘ │     via proxy)
//!   ◀────────────────┼───── body verbatim / error envelope ─────│
//!                    │                                           │
//!                    │  ┌─────────────────────────────────────┐ │
//!                    │  │   config        lifecycle            │ │
//!                    │  │   load/validate startup/shutdown     │ │
//!                    │  └─────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod egress;
pub mod http;
pub mod lifecycle;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
