//! Console configuration.
//!
//! Resolves the back-office API base URL from the environment, falling back
//! to the development default, and normalises it the same way regardless of
//! how the operator typed it.

use std::env;

/// Environment variable holding the back-office API base URL.
pub const API_URL_ENV: &str = "CONSOLE_API_URL";

/// Development default used when nothing is configured.
pub const DEFAULT_API_URL: &str = "https://localhost:7166/api";

// ---------------------------------------------------------------------------
// URL normalisation
// ---------------------------------------------------------------------------

/// Normalise a configured base URL:
/// - strip surrounding whitespace and trailing slashes
/// - ensure a scheme is present (https, or http for localhost)
/// - fall back to [`DEFAULT_API_URL`] when the input is blank
pub fn normalize_base_url(url: &str) -> String {
    let mut url = url.trim().to_string();

    if url.is_empty() {
        return DEFAULT_API_URL.to_string();
    }

    // Ensure scheme
    if !url.starts_with("http://") && !url.starts_with("https://") {
        if url.starts_with("localhost") || url.starts_with("127.0.0.1") {
            url = format!("http://{url}");
        } else {
            url = format!("https://{url}");
        }
    }

    // Strip trailing slashes
    while url.ends_with('/') {
        url.pop();
    }

    url
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Resolved console configuration. Construction never fails; malformed
/// input degrades to its normalised form.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub base_url: String,
}

impl ConsoleConfig {
    /// Build a configuration from an explicit base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// Read the configuration from `CONSOLE_API_URL`.
    pub fn from_env() -> Self {
        let raw = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&raw)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_normalize_adds_https_scheme() {
        assert_eq!(
            normalize_base_url("backoffice.example.com/api"),
            "https://backoffice.example.com/api"
        );
    }

    #[test]
    fn test_normalize_uses_http_for_localhost() {
        assert_eq!(
            normalize_base_url("localhost:7166/api"),
            "http://localhost:7166/api"
        );
        assert_eq!(
            normalize_base_url("127.0.0.1:7166/api"),
            "http://127.0.0.1:7166/api"
        );
    }

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("https://localhost:7166/api///"),
            "https://localhost:7166/api"
        );
    }

    #[test]
    fn test_normalize_blank_falls_back_to_default() {
        assert_eq!(normalize_base_url("   "), DEFAULT_API_URL);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variable() {
        std::env::set_var(API_URL_ENV, "https://intranet.example.com/api/");
        let config = ConsoleConfig::from_env();
        std::env::remove_var(API_URL_ENV);
        assert_eq!(config.base_url, "https://intranet.example.com/api");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        std::env::remove_var(API_URL_ENV);
        let config = ConsoleConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_URL);
    }
}
