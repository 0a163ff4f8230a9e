//! Backend URL resolution.

/// Base URL for backend requests.
///
/// A deployment can pin the backend at compile time through the
/// `ONBOARD_API_BASE` environment variable. Without it the base is derived
/// from the current window location, with the backend assumed on port 3000.
/// Outside a browser context (unit tests) this returns an empty string.
pub fn api_base() -> String {
    if let Some(base) = option_env!("ONBOARD_API_BASE") {
        return base.trim_end_matches('/').to_string();
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
    format!("{}//{}:3000", protocol, hostname)
}

/// Prefix a path like `/api/member/123` with [`api_base`].
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
