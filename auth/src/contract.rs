//! Client side of the `/api/auth/login` contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is opaque: the client posts `{role, username, password}` as
//! JSON with cookies included and only looks at the response status. A
//! non-2xx body may carry a `message` that is shown verbatim.
//!
//! ERROR HANDLING
//! ==============
//! `LoginFailure`'s `Display` is the exact text the form shows, so callers
//! never format failures themselves.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::role::Role;

/// Authentication endpoint, relative to the portal origin.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";

/// Target of the "Reset password" link.
pub const RESET_PASSWORD_PATH: &str = "/reset-password";

/// Fallback text for a rejected login with no usable message.
pub const LOGIN_FAILED: &str = "Login failed";

/// Fallback text when no response arrived at all.
pub const LOGIN_ERROR: &str = "An error occurred during login";

/// JSON body of `POST /api/auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: Role,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("role", &self.role)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Why a login attempt did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginFailure {
    /// Non-2xx response carrying a server message.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Non-2xx response without a usable message.
    #[error("{}", LOGIN_FAILED)]
    Unexplained { status: u16 },
    /// The request never produced a response. The detail is for logs only.
    #[error("{}", LOGIN_ERROR)]
    Transport(String),
}

impl LoginFailure {
    /// HTTP status of the response, when one arrived.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Unexplained { status } => Some(*status),
            Self::Transport(_) => None,
        }
    }
}

/// Classify a completed HTTP exchange.
///
/// Any 2xx status is success regardless of body. Otherwise the body's
/// `message` string is used when present and non-empty.
///
/// # Errors
///
/// Returns [`LoginFailure::Rejected`] or [`LoginFailure::Unexplained`] for
/// non-2xx statuses.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<(), LoginFailure> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    match rejection_message(body) {
        Some(message) => Err(LoginFailure::Rejected { status, message }),
        None => Err(LoginFailure::Unexplained { status }),
    }
}

fn rejection_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_owned)
}
