//! Auth module tests.

use super::session::{clear_session_cookie, extract_session_token, SESSION_COOKIE_NAME};
use super::state::AuthConfig;
use axum::http::{header::COOKIE, HeaderMap, HeaderValue};

fn headers_with_cookie(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static(value));
    headers
}

#[test]
fn extract_session_token_reads_cookie() {
    let headers = headers_with_cookie("session_token=abc123");
    assert_eq!(extract_session_token(&headers), Some("abc123".to_string()));
}

#[test]
fn extract_session_token_scans_multiple_pairs() {
    let headers = headers_with_cookie("theme=dark; session_token=abc123; lang=en");
    assert_eq!(extract_session_token(&headers), Some("abc123".to_string()));
}

#[test]
fn extract_session_token_ignores_other_cookies() {
    let headers = headers_with_cookie("theme=dark; lang=en");
    assert_eq!(extract_session_token(&headers), None);
}

#[test]
fn extract_session_token_without_cookie_header() {
    let headers = HeaderMap::new();
    assert_eq!(extract_session_token(&headers), None);
}

#[test]
fn extract_session_token_trims_whitespace() {
    let headers = headers_with_cookie("  session_token = abc123 ");
    assert_eq!(extract_session_token(&headers), Some("abc123".to_string()));
}

#[test]
fn clear_cookie_expires_immediately() {
    let config = AuthConfig::new("http://localhost:3000".to_string());
    let cookie = clear_session_cookie(&config);
    let value = cookie.to_str().expect("ascii cookie");
    assert!(value.starts_with(&format!("{SESSION_COOKIE_NAME}=;")));
    assert!(value.contains("Max-Age=0"));
    assert!(value.contains("HttpOnly"));
    assert!(!value.contains("Secure"));
}

#[test]
fn clear_cookie_is_secure_for_https_frontend() {
    let config = AuthConfig::new("https://app.tld".to_string());
    let cookie = clear_session_cookie(&config);
    assert!(cookie.to_str().expect("ascii cookie").contains("Secure"));
}

#[test]
fn clear_cookie_deletes_the_cookie_the_middleware_reads() {
    // Both variants must target the same cookie name the extractor scans for.
    for config in [
        AuthConfig::new("http://localhost:3000".to_string()),
        AuthConfig::new("https://app.tld".to_string()),
    ] {
        let cookie = clear_session_cookie(&config);
        let value = cookie.to_str().expect("ascii cookie");
        assert!(value.starts_with(&format!("{SESSION_COOKIE_NAME}=;")));
    }
}

#[test]
fn auth_config_defaults_login_path() {
    let config = AuthConfig::new("https://app.tld".to_string());
    assert_eq!(config.login_path(), "/login");
    assert!(config.session_cookie_secure());
}

#[test]
fn auth_config_overrides_login_path() {
    let config =
        AuthConfig::new("http://localhost:3000".to_string()).with_login_path("/signin".to_string());
    assert_eq!(config.login_path(), "/signin");
    assert!(!config.session_cookie_secure());
}
