//! Shared login model for the internship portal.
//!
//! This crate owns everything the browser view and the terminal client agree
//! on: the portal roles, the `/api/auth/login` request/response contract, and
//! the login state machine. It has no browser or runtime dependencies so both
//! `client` (WASM) and `cli` (native) can drive the same transitions.

pub mod contract;
pub mod flow;
pub mod role;

pub use contract::{
    LOGIN_ENDPOINT, LOGIN_ERROR, LOGIN_FAILED, LoginFailure, LoginRequest, RESET_PASSWORD_PATH,
    interpret_response,
};
pub use flow::{Credentials, Field, LoginAttempt, LoginEffect, LoginEvent, LoginState, Phase, UnknownField};
pub use role::{Role, UnknownRole};
