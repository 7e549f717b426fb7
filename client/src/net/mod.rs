//! Networking for the sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `/api/auth/login` call. The wire schema itself is
//! owned by `portal_auth::contract` so the CLI shares it.

pub mod api;
