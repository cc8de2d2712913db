//! The request/response bridge.
//!
//! # Responsibilities
//! - Rebuild each inbound request against the configured target base URL
//! - Stream the inbound body out without buffering it
//! - Inject the fixed content-negotiation headers
//! - Map every failure to the JSON error envelope
//!
//! # Design Decisions
//! - Path and query are concatenated onto the target verbatim, with no
//!   re-encoding
//! - Inbound headers are NOT forwarded; the relay speaks JSON to the
//!   upstream regardless of what the caller sent
//! - The upstream status code is not propagated: success and failure
//!   both default to 200, and callers inspect the body shape

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::envelope::ErrorEnvelope;
use crate::http::server::RelayState;

const APPLICATION_JSON: &str = "application/json";

/// Catch-all handler: every method and path lands here.
pub async fn relay_handler(State(state): State<RelayState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let request_uri = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/")
        .to_owned();
    let target = format!("{}{}", state.config.target_url, request_uri);

    tracing::debug!(method = %method, url = %target, "Relaying request");

    // The inbound body is handed to the client as a stream, so large
    // payloads never materialize in relay memory.
    let body = reqwest::Body::wrap_stream(request.into_body().into_data_stream());

    let outbound = match state
        .client
        .request(method, &target)
        .header(header::CONTENT_TYPE, APPLICATION_JSON)
        .header(header::ACCEPT, APPLICATION_JSON)
        .body(body)
        .build()
    {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(url = %target, error = %e, "Failed to build outbound request");
            return error_response(&state, e);
        }
    };

    let upstream = match state.client.execute(outbound).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(url = %target, error = %e, "Upstream request failed");
            return error_response(&state, e);
        }
    };

    let upstream_status = upstream.status();
    match upstream.bytes().await {
        Ok(bytes) => {
            tracing::debug!(
                upstream_status = %upstream_status,
                bytes = bytes.len(),
                "Upstream response relayed"
            );
            ([(header::CONTENT_TYPE, APPLICATION_JSON)], bytes).into_response()
        }
        Err(e) => {
            tracing::error!(url = %target, error = %e, "Failed to read upstream body");
            error_response(&state, e)
        }
    }
}

fn error_response(state: &RelayState, err: impl std::fmt::Display) -> Response {
    let status = StatusCode::from_u16(state.config.error_status).unwrap_or(StatusCode::OK);
    ErrorEnvelope::new(err).into_response(status)
}
