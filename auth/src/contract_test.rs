use super::*;

// =============================================================
// LoginRequest
// =============================================================

#[test]
fn request_serializes_to_wire_shape() {
    let request = LoginRequest {
        role: Role::Student,
        username: "student".to_owned(),
        password: "secret".to_owned(),
    };
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"role":"student","username":"student","password":"secret"}"#
    );
}

#[test]
fn request_debug_redacts_password() {
    let request = LoginRequest {
        role: Role::Guide,
        username: "g1".to_owned(),
        password: "hunter2".to_owned(),
    };
    let debug = format!("{request:?}");
    assert!(debug.contains("g1"));
    assert!(!debug.contains("hunter2"));
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn any_2xx_is_success() {
    assert_eq!(interpret_response(200, br#"{"ok":true}"#), Ok(()));
    assert_eq!(interpret_response(204, b""), Ok(()));
    assert_eq!(interpret_response(201, b"<html>"), Ok(()));
}

#[test]
fn server_message_is_shown_verbatim() {
    let err = interpret_response(401, br#"{"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(
        err,
        LoginFailure::Rejected { status: 401, message: "Invalid credentials".to_owned() }
    );
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn missing_message_falls_back_to_login_failed() {
    let err = interpret_response(500, br#"{"error":"boom"}"#).unwrap_err();
    assert_eq!(err, LoginFailure::Unexplained { status: 500 });
    assert_eq!(err.to_string(), LOGIN_FAILED);
    assert_eq!(LOGIN_FAILED, "Login failed");
}

#[test]
fn unparseable_body_falls_back_to_login_failed() {
    let err = interpret_response(500, b"Internal Server Error").unwrap_err();
    assert_eq!(err.to_string(), "Login failed");
}

#[test]
fn empty_or_non_string_message_falls_back() {
    assert_eq!(
        interpret_response(400, br#"{"message":""}"#),
        Err(LoginFailure::Unexplained { status: 400 })
    );
    assert_eq!(
        interpret_response(400, br#"{"message":42}"#),
        Err(LoginFailure::Unexplained { status: 400 })
    );
}

#[test]
fn redirect_statuses_are_not_success() {
    assert_eq!(interpret_response(302, b""), Err(LoginFailure::Unexplained { status: 302 }));
}

// =============================================================
// LoginFailure
// =============================================================

#[test]
fn transport_failure_hides_detail() {
    let err = LoginFailure::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "An error occurred during login");
    assert_eq!(err.to_string(), LOGIN_ERROR);
    assert_eq!(err.status(), None);
}

#[test]
fn status_reports_response_code() {
    assert_eq!(LoginFailure::Unexplained { status: 503 }.status(), Some(503));
    assert_eq!(
        LoginFailure::Rejected { status: 401, message: "no".to_owned() }.status(),
        Some(401)
    );
}
