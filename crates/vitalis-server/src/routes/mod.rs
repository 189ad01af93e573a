pub mod auth;
pub mod health;
pub mod index;
pub mod reports;
pub mod sessions;

use axum::http::HeaderMap;
use axum::http::header::HOST;

use vitalis_core::report_keys::report_url_path;

/// Absolute download URL for a stored report, as seen by the caller.
///
/// Scheme from `X-Forwarded-Proto` (first hop) or `http`; host from `Host`.
pub(crate) fn report_url(headers: &HeaderMap, file_name: &str) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("http");
    let host = headers
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}{}", report_url_path(file_name))
}
