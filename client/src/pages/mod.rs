//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; state transitions are delegated
//! to `portal_auth::flow`.

pub mod login;
