use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_trimmed_value() {
    assert_eq!(parse_port(Some(" 8080 ")), Ok(8080));
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort("eighty".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

// =============================================================================
// parse_backend_url
// =============================================================================

#[test]
fn backend_url_is_optional() {
    assert_eq!(parse_backend_url(None), Ok(None));
    assert_eq!(parse_backend_url(Some("")), Ok(None));
}

#[test]
fn backend_url_trims_trailing_slash() {
    assert_eq!(
        parse_backend_url(Some("https://auth.example.test/")),
        Ok(Some("https://auth.example.test".to_owned()))
    );
}

#[test]
fn backend_url_requires_http_scheme() {
    assert_eq!(
        parse_backend_url(Some("ftp://auth.example.test")),
        Err(ConfigError::InvalidBackendUrl("ftp://auth.example.test".to_owned()))
    );
}

// =============================================================================
// env_parse_u64: unique var names avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_u64_reads_value() {
    let key = "__TEST_PORTAL_U64_OK_3141__";
    unsafe { std::env::set_var(key, "42") };
    assert_eq!(env_parse_u64(key, 7), 42);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_falls_back_on_invalid_or_unset() {
    let key = "__TEST_PORTAL_U64_BAD_2718__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 7), 7);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_parse_u64("__TEST_PORTAL_U64_UNSET_1618__", 9), 9);
}
