//! API utilities for frontend-backend communication

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Base URL for API requests
///
/// The backend serves the compiled frontend, so requests go to the origin
/// the page was loaded from. Empty string if window is not available, which
/// makes every URL relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/d100/current_week");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET `path` and decode the JSON body.
///
/// `Ok(None)` on 404 so callers can tell "absent" from "failed".
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<Option<T>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
