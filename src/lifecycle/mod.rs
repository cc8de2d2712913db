//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build proxy URL + client → Bind → Serve
//!
//! Shutdown:
//!     SIGINT (signals.rs) → Shutdown::trigger (shutdown.rs)
//!     → server drains and exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
