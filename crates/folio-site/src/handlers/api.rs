//! JSON API Handlers
//!
//! Same resolution as the HTML pages, serialized as the decision itself.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use folio_core::{RenderDecision, resolve_path};

use super::route_remainder;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/case-studies`
pub async fn list_case_studies(
    State(state): State<AppState>,
) -> Result<Json<RenderDecision>, ApiError> {
    Ok(Json(resolve_path(state.catalog(), None)?))
}

/// `GET /api/case-studies/{*rest}`
pub async fn get_case_study(
    State(state): State<AppState>,
    uri: Uri,
    rest: Result<Path<String>, PathRejection>,
) -> Result<Json<RenderDecision>, ApiError> {
    let rest = route_remainder(&uri, "/api/case-studies/", rest);
    let decision = resolve_path(state.catalog(), Some(rest.as_str())).inspect_err(|e| {
        tracing::info!("API case study lookup failed: {e}");
    })?;
    tracing::debug!(view = decision.view(), path = %rest, "Resolved API case study route");
    Ok(Json(decision))
}
