//! Configuration schema definitions.
//!
//! The relay has a single flat configuration surface. All fields have
//! defaults so a config file only needs to name the keys it changes;
//! required keys are enforced later by semantic validation.

use serde::{Deserialize, Deserializer, Serialize};

/// Root configuration for the relay.
///
/// Immutable once loaded; shared via `Arc` with every subsystem that
/// needs it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Absolute base URL every inbound request is re-targeted to
    /// (e.g. "http://backend.internal:9000"). Required.
    pub target_url: String,

    /// Port the relay listens on. Bound on 0.0.0.0. Required (non-zero).
    #[serde(deserialize_with = "port_from_string_or_int")]
    pub app_port: u16,

    /// Forward proxy for egress traffic. Empty means direct dialing.
    /// Accepts `host:port` (scheme defaults to http), a full `http://`
    /// URL, or a `socks5://` URL.
    pub proxy_url: String,

    /// Proxy credentials. Both must be set together or both left empty;
    /// a one-sided pair is rejected at startup.
    pub proxy_username: String,
    pub proxy_password: String,

    /// HTTP status code sent with the JSON error envelope. The default
    /// of 200 preserves the legacy relay contract where callers detect
    /// failure by body shape, not status.
    pub error_status: u16,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            target_url: String::new(),
            app_port: 8080,
            proxy_url: String::new(),
            proxy_username: String::new(),
            proxy_password: String::new(),
            error_status: 200,
        }
    }
}

impl RelayConfig {
    /// True when a forward proxy is configured for egress.
    pub fn uses_proxy(&self) -> bool {
        !self.proxy_url.is_empty()
    }
}

/// Accept `app_port = 8080` as well as `app_port = "8080"`.
fn port_from_string_or_int<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortRepr {
        Int(u16),
        Text(String),
    }

    match PortRepr::deserialize(deserializer)? {
        PortRepr::Int(port) => Ok(port),
        PortRepr::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port: {:?}", text))),
    }
}
