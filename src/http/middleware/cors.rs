//! Cross-Origin Middleware.
//! Answers preflights and stamps permissive CORS headers.

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub async fn cors_middleware(req: Request<Body>, next: Next) -> Response {
    // 1. Preflight: 200, empty body, headers only. Runs before URL
    //    extraction, so no fetch is ever attempted.
    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        set_cors_headers(response.headers_mut());
        return response;
    }

    // 2. Every other response path (success, 400, 500) gets the same
    //    headers unconditionally.
    let mut response = next.run(req).await;
    set_cors_headers(response.headers_mut());
    response
}

fn set_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}
