//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all route, middleware)
//!     → relay.rs (rebuild request, execute via egress client)
//!     → envelope.rs (JSON error body on any failure)
//!     → Send to client
//! ```

pub mod envelope;
pub mod relay;
pub mod server;

pub use envelope::ErrorEnvelope;
pub use server::{RelayServer, RelayState};
