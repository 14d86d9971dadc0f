use nimbus::config;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

// Env-var mutations must not interleave across test threads
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://cloud.example.com/gateway/"),
        "https://cloud.example.com/gateway"
    );
}

#[test]
fn test_sanitize_base_url_no_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://cloud.example.com/gateway"),
        "https://cloud.example.com/gateway"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://cloud.example.com/gateway///"),
        "https://cloud.example.com/gateway"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://cloud.example.com/gateway/  "),
        "https://cloud.example.com/gateway"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:5000");
}

#[test]
fn test_sanitize_base_url_whitespace_only() {
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:5000");
}

#[test]
fn test_get_api_base_url_with_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "https://cloud.example.com/gateway/");

    let result = config::get_api_base_url();

    assert_eq!(result, "https://cloud.example.com/gateway");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_api_base_url_without_trailing_slash() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("API_BASE_URL", "https://cloud.example.com/gateway");

    let result = config::get_api_base_url();

    assert_eq!(result, "https://cloud.example.com/gateway");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_get_api_base_url_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("API_BASE_URL");

    let result = config::get_api_base_url();

    // DEFAULT_API_BASE_URL is empty, so sanitize_base_url returns the
    // localhost fallback
    assert_eq!(result, "http://localhost:5000");
}

#[test]
fn test_get_api_token_default_is_empty() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("API_TOKEN");

    assert_eq!(config::get_api_token(), "");
}
