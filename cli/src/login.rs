//! Terminal driver for the portal login flow.
//!
//! The same `LoginState` machine the browser uses runs here. The `Send`
//! effect becomes a `reqwest` call with a cookie store, and the `Navigate`
//! effect is reported as the dashboard URL instead of followed.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use portal_auth::{
    Field, LOGIN_ENDPOINT, LoginEffect, LoginEvent, LoginFailure, LoginRequest, LoginState, Role,
    interpret_response,
};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client init failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("username and password are both required")]
    IncompleteCredentials,
    /// Visible login error, exactly as the sign-in form would show it.
    /// `status` is absent when the backend never answered.
    #[error("{message}")]
    Login { message: String, status: Option<u16> },
}

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    pub dashboard_url: String,
    /// Names of cookies the backend set.
    pub cookies: Vec<String>,
}

/// HTTP client bound to one portal origin.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// # Errors
    ///
    /// Returns an error if `base_url` is not http(s) or the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let base_url = normalize_base_url(base_url)?;
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { http, base_url })
    }

    /// Absolute URL for a portal path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST the login request. No timeout: the call waits for the network.
    ///
    /// # Errors
    ///
    /// Returns the failure the sign-in form would display.
    pub async fn send(&self, request: &LoginRequest) -> Result<Vec<String>, LoginFailure> {
        let url = self.url(LOGIN_ENDPOINT);
        tracing::debug!(%url, role = %request.role, username = %request.username, "sending login");
        let resp = self.http.post(&url).json(request).send().await.map_err(|e| {
            tracing::debug!(error = %e, "login transport failure");
            LoginFailure::Transport(e.to_string())
        })?;

        let status = resp.status().as_u16();
        let cookies: Vec<String> = resp.cookies().map(|c| c.name().to_owned()).collect();
        // An unreadable body is treated like one without a message.
        let body = resp.bytes().await.unwrap_or_default();
        tracing::debug!(status, cookies = cookies.len(), "login response");
        interpret_response(status, &body)?;
        Ok(cookies)
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(CliError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

/// Fill the form, submit it, and settle the single request.
///
/// # Errors
///
/// Returns [`CliError::IncompleteCredentials`] when a field is empty and
/// [`CliError::Login`] with the visible error text and response status
/// when sign-in fails.
pub async fn sign_in(
    client: &PortalClient,
    role: Role,
    username: &str,
    password: &str,
) -> Result<SignedIn, CliError> {
    let mut state = LoginState::default();
    for event in [
        LoginEvent::SelectRole(role),
        LoginEvent::Edit(Field::Username, username.to_owned()),
        LoginEvent::Edit(Field::Password, password.to_owned()),
    ] {
        state = state.transition(event).0;
    }

    let (state, effect) = state.transition(LoginEvent::Submit);
    let Some(LoginEffect::Send(pending)) = effect else {
        return Err(CliError::IncompleteCredentials);
    };

    let (cookies, status, outcome) = match client.send(&pending.request).await {
        Ok(cookies) => (cookies, None, Ok(())),
        Err(failure) => {
            tracing::debug!(status = ?failure.status(), "sign-in refused");
            (Vec::new(), failure.status(), Err(failure))
        }
    };

    let (state, effect) = state.transition(LoginEvent::settled(pending.attempt, outcome));
    match effect {
        Some(LoginEffect::Navigate(path)) => Ok(SignedIn { dashboard_url: client.url(&path), cookies }),
        _ => Err(CliError::Login { message: state.error.unwrap_or_default(), status }),
    }
}
