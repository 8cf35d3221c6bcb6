// src/logging_middleware.rs
//! Debug logging of submitted form data and the API's answer to it

use axum::body::{to_bytes, HttpBody};
use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{debug, enabled, Level};

/// Largest body that is buffered for logging
const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Logs request and response bodies when the debug level is enabled.
/// Bodies without a known length, or larger than [`MAX_LOGGED_BODY`], are
/// passed through unlogged.
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let request = if loggable(request.body()) {
        let (parts, body) = request.into_parts();
        let bytes = to_bytes(body, MAX_LOGGED_BODY)
            .await
            .map_err(|_| StatusCode::BAD_REQUEST)?;

        if let Some(body) = printable(&bytes) {
            debug!(method = %parts.method, uri = %parts.uri, request_body = %body, "📥 Submission");
        }
        Request::from_parts(parts, Body::from(bytes))
    } else {
        debug!(method = %request.method(), uri = %request.uri(), "📥 Submission (body not logged)");
        request
    };

    let response = next.run(request).await;
    if !loggable(response.body()) {
        debug!(status = %response.status(), "📤 Response (body not logged)");
        return Ok(response);
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, MAX_LOGGED_BODY)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(body) = printable(&bytes) {
        debug!(status = %parts.status, response_body = %body, "📤 Response");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Known length within the logging cap.
fn loggable(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_LOGGED_BODY as u64)
}

/// Compact JSON when the body parses as JSON, raw UTF-8 otherwise.
fn printable(bytes: &[u8]) -> Option<String> {
    if bytes.is_empty() {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;
    Some(
        serde_json::from_str::<serde_json::Value>(text)
            .map(|json| json.to_string())
            .unwrap_or_else(|_| text.to_string()),
    )
}
