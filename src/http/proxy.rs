//! Forwarding handler.
//!
//! # Responsibilities
//! - Extract the target URL from the query string
//! - Issue the outbound fetch and inspect its result
//! - Relay upstream status, content type, and body verbatim
//! - Map the two failure modes (missing parameter, fetch error) to
//!   structured JSON payloads

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

/// Content type used when the upstream did not declare one.
const FALLBACK_CONTENT_TYPE: &str = "text/plain";

/// Accepted query parameters.
#[derive(Debug, Deserialize)]
pub struct ProxyParams {
    url: Option<String>,
}

/// Structured error payload.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Main forwarding handler.
/// Fetches the caller-supplied URL and mirrors the upstream reply.
pub async fn proxy_handler(
    State(state): State<AppState>,
    Query(params): Query<ProxyParams>,
) -> Response {
    // 1. Extract target. Absent or empty means no fetch at all.
    let target = match params.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Missing URL parameter",
                    details: None,
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(target = %target, "Forwarding request");

    // 2. Fetch and relay. Upstream error statuses pass through; only a
    //    failed fetch maps to 500.
    match state.fetcher.fetch(target).await {
        Ok(upstream) => {
            let content_type = upstream
                .content_type
                .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

            (
                upstream.status,
                [(header::CONTENT_TYPE, content_type)],
                upstream.body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(target = %target, error = %e, "Upstream fetch failed");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Fetch failed",
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
