//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses the configured `base_url` when it is set. Otherwise the base is built
/// from the current window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if there is no `base_url` and no window
pub fn api_base(api: &ApiConfig) -> String {
    if !api.base_url.is_empty() {
        return api.base_url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/register/");
/// ```
pub fn api_url(api: &ApiConfig, path: &str) -> String {
    join_url(&api_base(api), path)
}

/// Join a base and a path with exactly one slash between them
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
