//! Case Study Handlers
//!
//! `/case-studies` and `/case-studies/{*rest}` both go through the resolver;
//! only the first segment of `rest` selects a study.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use folio_core::{RenderDecision, resolve_path};

use super::route_remainder;
use crate::error::Result;
use crate::state::AppState;
use crate::templates::{CaseStudyDetailTemplate, CaseStudyListTemplate};

/// Handler for the listing page.
pub async fn case_study_index(State(state): State<AppState>) -> Result<Response> {
    render(&state, None)
}

/// Handler for a single case study, with any trailing segments.
pub async fn case_study_detail(
    State(state): State<AppState>,
    uri: Uri,
    rest: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let rest = route_remainder(&uri, "/case-studies/", rest);
    render(&state, Some(rest.as_str()))
}

fn render(state: &AppState, rest: Option<&str>) -> Result<Response> {
    let decision = resolve_path(state.catalog(), rest).inspect_err(|e| {
        tracing::info!("Case study lookup failed: {e}");
    })?;
    tracing::debug!(view = decision.view(), path = ?rest, "Resolved case study route");

    let response = match decision {
        RenderDecision::Listing { studies } => CaseStudyListTemplate {
            page_title: state.page_title("Case Studies"),
            studies,
        }
        .into_response(),
        RenderDecision::Detail { study } => CaseStudyDetailTemplate {
            page_title: state.page_title(study.title),
            study,
        }
        .into_response(),
    };
    Ok(response)
}
