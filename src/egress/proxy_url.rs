//! Forward-proxy URL construction.
//!
//! # Responsibilities
//! - Normalize raw proxy addresses (`host:port` gets an http scheme)
//! - Embed credentials into the URL authority (`user:pass@host:port`)
//! - Enforce credential rules per scheme
//!
//! # Design Decisions
//! - Credentials are both-or-neither; a one-sided pair is a hard error
//!   rather than being silently dropped
//! - SOCKS5 proxies always require credentials: an empty userinfo
//!   segment produces an authority the proxy cannot authenticate

use thiserror::Error;
use url::Url;

/// Error type for proxy URL construction.
#[derive(Debug, Error)]
pub enum ProxyUrlError {
    #[error("malformed proxy URL {url:?}: {source}")]
    Parse {
        url: String,
        source: url::ParseError,
    },

    #[error("proxy_username and proxy_password must be set together")]
    PartialCredentials,

    #[error("proxy credentials configured but proxy_url is empty")]
    CredentialsWithoutProxy,

    #[error("SOCKS5 proxy requires both proxy_username and proxy_password")]
    MissingSocksCredentials,

    #[error("cannot embed credentials in proxy URL {0:?}")]
    CredentialsRejected(String),
}

/// Build the egress proxy URL from raw configuration values.
///
/// Returns `Ok(None)` when `raw` is empty (direct egress). A raw value
/// without a scheme is treated as an HTTP proxy; a `socks5://` scheme
/// follows the SOCKS5 rule and requires credentials.
pub fn build(raw: &str, username: &str, password: &str) -> Result<Option<Url>, ProxyUrlError> {
    if raw.is_empty() {
        if !username.is_empty() || !password.is_empty() {
            return Err(ProxyUrlError::CredentialsWithoutProxy);
        }
        return Ok(None);
    }

    let normalized = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let url = Url::parse(&normalized).map_err(|source| ProxyUrlError::Parse {
        url: raw.to_string(),
        source,
    })?;

    if url.scheme().starts_with("socks5") {
        if username.is_empty() || password.is_empty() {
            return Err(ProxyUrlError::MissingSocksCredentials);
        }
        return with_credentials(url, username, password).map(Some);
    }

    match (username.is_empty(), password.is_empty()) {
        (true, true) => Ok(Some(url)),
        (false, false) => with_credentials(url, username, password).map(Some),
        _ => Err(ProxyUrlError::PartialCredentials),
    }
}

/// Build a SOCKS5 proxy URL. The scheme is fixed to `socks5://` and
/// credentials are mandatory.
pub fn socks5(host: &str, username: &str, password: &str) -> Result<Url, ProxyUrlError> {
    if username.is_empty() || password.is_empty() {
        return Err(ProxyUrlError::MissingSocksCredentials);
    }

    let raw = format!("socks5://{}", host);
    let url = Url::parse(&raw).map_err(|source| ProxyUrlError::Parse {
        url: raw.clone(),
        source,
    })?;

    with_credentials(url, username, password)
}

fn with_credentials(mut url: Url, username: &str, password: &str) -> Result<Url, ProxyUrlError> {
    let display = url.to_string();
    url.set_username(username)
        .and_then(|_| url.set_password(Some(password)))
        .map_err(|_| ProxyUrlError::CredentialsRejected(display))?;
    Ok(url)
}
