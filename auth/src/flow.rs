//! Login form state machine.
//!
//! DESIGN
//! ======
//! `LoginState` is a plain value. Every user action or network outcome is a
//! `LoginEvent`; `LoginState::transition` returns the next state plus at most
//! one `LoginEffect` for the caller to run (send the request, navigate).
//! Nothing here touches the network or the browser.
//!
//! Phases:
//! - `Idle` --submit--> `Pending`
//! - `Pending` --succeeded--> `Redirecting` (terminal)
//! - `Pending` --failed--> `Idle` with an error
//!
//! Outcomes carry the attempt number they answer. An outcome for any attempt
//! other than the pending one is dropped, so a late response can never
//! overwrite newer state.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::fmt;
use std::str::FromStr;

use crate::contract::{LoginFailure, LoginRequest};
use crate::role::Role;

/// Error returned when text does not name a credential field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown credential field `{0}`")]
pub struct UnknownField(pub String);

/// Editable credential field, addressed by its form input name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    /// Form input `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "username" => Ok(Self::Username),
            "password" => Ok(Self::Password),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

/// Username/password pair as typed.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Submission lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// A request is in flight for `attempt`, submitted as `role`.
    Pending { attempt: u64, role: Role },
    /// Login succeeded; the caller is navigating to `path`.
    Redirecting { path: String },
}

/// Everything the form can react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    SelectRole(Role),
    Edit(Field, String),
    TogglePasswordVisibility,
    Submit,
    Succeeded { attempt: u64 },
    Failed { attempt: u64, failure: LoginFailure },
}

impl LoginEvent {
    /// Build the outcome event for a finished request.
    #[must_use]
    pub fn settled(attempt: u64, outcome: Result<(), LoginFailure>) -> Self {
        match outcome {
            Ok(()) => Self::Succeeded { attempt },
            Err(failure) => Self::Failed { attempt, failure },
        }
    }
}

/// One request the caller must send, tagged with its attempt number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginAttempt {
    pub attempt: u64,
    pub request: LoginRequest,
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEffect {
    /// POST the request and feed the outcome back with [`LoginEvent::settled`].
    Send(LoginAttempt),
    /// Leave the login page for `path`.
    Navigate(String),
}

/// State of one rendered login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub role: Role,
    pub credentials: Credentials,
    pub password_visible: bool,
    pub phase: Phase,
    pub error: Option<String>,
    attempts: u64,
}

impl LoginState {
    /// True while a request is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, Phase::Idle)
    }

    #[cfg(test)]
    pub(crate) fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Apply `event`, returning the next state and the effect to run.
    #[must_use]
    pub fn transition(&self, event: LoginEvent) -> (Self, Option<LoginEffect>) {
        let mut next = self.clone();
        let effect = next.apply(event);
        (next, effect)
    }

    fn apply(&mut self, event: LoginEvent) -> Option<LoginEffect> {
        match event {
            LoginEvent::SelectRole(role) => {
                self.role = role;
                None
            }
            LoginEvent::Edit(Field::Username, value) => {
                self.credentials.username = value;
                None
            }
            LoginEvent::Edit(Field::Password, value) => {
                self.credentials.password = value;
                None
            }
            LoginEvent::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
                None
            }
            LoginEvent::Submit => self.submit(),
            LoginEvent::Succeeded { attempt } => {
                let role = self.pending_role(attempt)?;
                let path = role.dashboard_path().to_owned();
                self.phase = Phase::Redirecting { path: path.clone() };
                Some(LoginEffect::Navigate(path))
            }
            LoginEvent::Failed { attempt, failure } => {
                self.pending_role(attempt)?;
                self.phase = Phase::Idle;
                self.error = Some(failure.to_string());
                None
            }
        }
    }

    fn submit(&mut self) -> Option<LoginEffect> {
        if !self.can_submit() || !self.credentials.is_complete() {
            return None;
        }
        self.attempts += 1;
        self.error = None;
        self.phase = Phase::Pending { attempt: self.attempts, role: self.role };
        Some(LoginEffect::Send(LoginAttempt {
            attempt: self.attempts,
            request: LoginRequest {
                role: self.role,
                username: self.credentials.username.clone(),
                password: self.credentials.password.clone(),
            },
        }))
    }

    /// Role of the pending submission if `attempt` is the one in flight.
    fn pending_role(&self, attempt: u64) -> Option<Role> {
        match self.phase {
            Phase::Pending { attempt: pending, role } if pending == attempt => Some(role),
            _ => None,
        }
    }
}
