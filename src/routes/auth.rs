//! Login proxy: forwards `POST /api/auth/login` to the configured backend.
//!
//! The host never interprets credentials. It relays the request body with the
//! headers the backend needs and hands back the backend's status, body and
//! session cookies untouched, so the browser sees the same contract it would
//! against the backend directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub(crate) const BACKEND_NOT_CONFIGURED: &str = "Authentication service is not configured";
pub(crate) const BACKEND_UNAVAILABLE: &str = "Authentication service unavailable";

pub(crate) fn upstream_login_url(backend: &str) -> String {
    format!("{}{}", backend.trim_end_matches('/'), portal_auth::LOGIN_ENDPOINT)
}

/// Copy the headers the backend needs from an incoming request.
pub(crate) fn forwarded_request_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [CONTENT_TYPE, COOKIE, ACCEPT] {
        for value in incoming.get_all(&name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// Copy the backend response headers the browser needs.
pub(crate) fn relayed_response_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for value in upstream.get_all(SET_COOKIE) {
        out.append(SET_COOKIE, value.clone());
    }
    if let Some(content_type) = upstream.get(CONTENT_TYPE) {
        out.insert(CONTENT_TYPE, content_type.clone());
    }
    out
}

fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "message": message }))).into_response()
}

/// `POST /api/auth/login`: relay to `{AUTH_BACKEND_URL}/api/auth/login`.
pub async fn login(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let Some(backend) = state.auth_backend_url.as_deref() else {
        tracing::warn!("login attempted but AUTH_BACKEND_URL is not set");
        return message_response(StatusCode::SERVICE_UNAVAILABLE, BACKEND_NOT_CONFIGURED);
    };

    let url = upstream_login_url(backend);
    let upstream = match state
        .http
        .post(&url)
        .headers(forwarded_request_headers(&headers))
        .body(body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!(error = %e, %url, "auth backend request failed");
            return message_response(StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE);
        }
    };

    let status = upstream.status();
    // Redirects are not followed, and a bare 3xx would read as "Login failed".
    if status.is_redirection() {
        tracing::warn!(
            status = status.as_u16(),
            location = ?upstream.headers().get(LOCATION),
            "auth backend redirected the login request"
        );
        return message_response(StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE);
    }
    let response_headers = relayed_response_headers(upstream.headers());
    let body = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, %url, "auth backend response unreadable");
            return message_response(StatusCode::BAD_GATEWAY, BACKEND_UNAVAILABLE);
        }
    };

    tracing::info!(status = status.as_u16(), "login relayed");
    (status, response_headers, body).into_response()
}
