//! REST call for signing in.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`, cookies included.
//! Server-side (SSR): stub returning a transport failure since the request is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is folded into `Result<(), LoginFailure>` so the caller can
//! feed it straight back into the login state machine.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portal_auth::{LoginFailure, LoginRequest};

#[cfg(any(test, feature = "hydrate"))]
fn transport_failure(detail: impl std::fmt::Display) -> LoginFailure {
    LoginFailure::Transport(detail.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn settle(status: u16, body: &[u8]) -> Result<(), LoginFailure> {
    portal_auth::interpret_response(status, body)
}

/// Sign in via `POST /api/auth/login`.
///
/// There is no client-side timeout; the call waits for the network.
///
/// # Errors
///
/// Returns the failure to display when the server rejects the credentials or
/// no response arrives.
pub async fn login(request: &LoginRequest) -> Result<(), LoginFailure> {
    #[cfg(feature = "hydrate")]
    {
        log::info!("login request: role={} user={}", request.role, request.username);
        let resp = gloo_net::http::Request::post(portal_auth::LOGIN_ENDPOINT)
            .credentials(web_sys::RequestCredentials::Include)
            .json(request)
            .map_err(transport_failure)?
            .send()
            .await
            .map_err(|e| {
                log::warn!("login request failed: {e}");
                transport_failure(e)
            })?;
        let status = resp.status();
        // An unreadable body is treated like one without a message.
        let body = resp.binary().await.unwrap_or_default();
        let outcome = settle(status, &body);
        if let Err(failure) = &outcome {
            log::warn!("login rejected: status={status} message={failure}");
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(LoginFailure::Transport("not available on server".to_owned()))
    }
}
