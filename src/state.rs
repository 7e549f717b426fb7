//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries what the login proxy needs: a pooled HTTP client and the
//! configured backend origin.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Shared application state. Clone is required by Axum.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub auth_backend_url: Option<Arc<str>>,
}

impl AppState {
    /// Build state from host config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed (TLS backend
    /// initialization failure).
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.auth_backend_timeout_secs))
            // Redirects and their cookies belong to the browser.
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { http, auth_backend_url: config.auth_backend_url.as_deref().map(Arc::from) })
    }
}
