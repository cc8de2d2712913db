//! Egress client construction.
//!
//! # Responsibilities
//! - Produce the single shared HTTP client used for all upstream calls
//! - Route through a forward proxy when one is configured
//!
//! # Design Decisions
//! - HTTP/1.1 only on the egress side; protocol upgrades are disabled
//!   because some upstream proxies mishandle them
//! - `.no_proxy()` when unconfigured, so egress never picks up ambient
//!   HTTP_PROXY environment variables
//! - No connect or request timeouts are applied; a hung upstream holds
//!   the inbound connection open (see DESIGN.md)

use thiserror::Error;
use url::Url;

/// Error type for egress client construction.
#[derive(Debug, Error)]
pub enum EgressError {
    #[error("failed to build egress client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Build the shared egress client, dialing directly or through `proxy`.
///
/// Constructed exactly once at startup; clones share the same
/// connection pool.
pub fn build_client(proxy: Option<Url>) -> Result<reqwest::Client, EgressError> {
    let builder = reqwest::Client::builder().http1_only();

    let builder = match proxy {
        Some(url) => {
            tracing::info!(scheme = url.scheme(), host = ?url.host_str(), "Egress via forward proxy");
            builder.proxy(reqwest::Proxy::all(url)?)
        }
        None => builder.no_proxy(),
    };

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egress::proxy_url;

    #[test]
    fn test_direct_client_builds() {
        assert!(build_client(None).is_ok());
    }

    #[test]
    fn test_http_proxy_client_builds() {
        let url = proxy_url::build("proxy.example.com:8080", "u", "p")
            .unwrap()
            .unwrap();
        assert!(build_client(Some(url)).is_ok());
    }

    #[test]
    fn test_socks5_proxy_client_builds() {
        let url = proxy_url::socks5("proxy.example.com:1080", "u", "p").unwrap();
        assert!(build_client(Some(url)).is_ok());
    }
}
