use super::*;

#[test]
fn transport_failure_keeps_detail_but_shows_generic_text() {
    let failure = transport_failure("TypeError: Failed to fetch");
    assert_eq!(failure, LoginFailure::Transport("TypeError: Failed to fetch".to_owned()));
    assert_eq!(failure.to_string(), "An error occurred during login");
}

#[test]
fn settle_accepts_success_status() {
    assert_eq!(settle(200, b"{}"), Ok(()));
}

#[test]
fn settle_surfaces_server_message() {
    let failure = settle(401, br#"{"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(failure.to_string(), "Invalid credentials");
}

#[test]
fn settle_falls_back_without_message() {
    let failure = settle(500, b"").unwrap_err();
    assert_eq!(failure.to_string(), "Login failed");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_is_unavailable_without_browser() {
    let request = LoginRequest {
        role: portal_auth::Role::Student,
        username: "student".to_owned(),
        password: "secret".to_owned(),
    };
    let outcome = poll_once(login(&request));
    assert!(matches!(outcome, Err(LoginFailure::Transport(_))));
}

/// Poll a future that never pends to completion.
fn poll_once<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(output) => output,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
