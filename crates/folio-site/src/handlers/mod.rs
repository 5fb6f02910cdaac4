//! HTTP Handlers

pub mod api;
pub mod case_studies;
pub mod health;
pub mod home;

use axum::extract::Path;
use axum::extract::rejection::PathRejection;
use axum::http::Uri;
use axum::response::Response;

/// Fallback for any route that does not match.
pub async fn not_found() -> Response {
    crate::error::not_found_page()
}

/// Catch-all remainder after `prefix`, percent-decoded when possible.
///
/// A remainder that does not decode to UTF-8 is passed on still encoded, so
/// it reaches the resolver and fails there like any other unknown id.
pub(crate) fn route_remainder(
    uri: &Uri,
    prefix: &str,
    decoded: Result<Path<String>, PathRejection>,
) -> String {
    match decoded {
        Ok(Path(rest)) => rest,
        Err(rejection) => {
            tracing::debug!("Undecodable route remainder: {rejection}");
            uri.path()
                .strip_prefix(prefix)
                .unwrap_or_default()
                .to_string()
        }
    }
}
