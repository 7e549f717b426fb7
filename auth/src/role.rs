//! Portal personas and the copy each one selects.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when text does not name a portal role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}` (expected student, guide or admin)")]
pub struct UnknownRole(pub String);

/// Persona a user signs in as. Serialized with its lowercase wire name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Guide,
    Admin,
}

impl Role {
    /// Every role, in tab order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Guide, Role::Admin];

    /// Wire name sent to the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Guide => "guide",
            Self::Admin => "admin",
        }
    }

    /// Tab label shown in the role selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Guide => "Guide",
            Self::Admin => "Admin",
        }
    }

    /// Guidance line rendered under the form.
    #[must_use]
    pub fn guidance(self) -> &'static str {
        match self {
            Self::Student => "Access internship opportunities and track your internship",
            Self::Guide => "Monitor and guide students through their internship journey",
            Self::Admin => "Manage portal operations and oversee all activities",
        }
    }

    /// Placeholder for the username input.
    #[must_use]
    pub fn username_placeholder(self) -> &'static str {
        self.as_str()
    }

    /// Landing page after a successful sign-in.
    #[must_use]
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Student => "/student-dashboard",
            Self::Guide => "/guide-dashboard",
            Self::Admin => "/admin-dashboard",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "guide" => Ok(Self::Guide),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownRole(raw.to_owned())),
        }
    }
}
