//! Router Configuration
//!
//! Route configuration for the site.

use axum::http::{HeaderValue, header};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{handlers, state::AppState};

/// Cache policy for preview images under `/projects`.
const STATIC_CACHE_CONTROL: &str = "public, max-age=3600";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let static_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static(STATIC_CACHE_CONTROL),
        ))
        .service(ServeDir::new(state.static_dir().join("projects")));

    Router::new()
        .route("/", get(handlers::home::home))
        .route("/health", get(handlers::health::health))
        .route(
            "/case-studies",
            get(handlers::case_studies::case_study_index),
        )
        .route(
            "/case-studies/",
            get(handlers::case_studies::case_study_index),
        )
        .route(
            "/case-studies/{*rest}",
            get(handlers::case_studies::case_study_detail),
        )
        .route(
            "/api/case-studies",
            get(handlers::api::list_case_studies),
        )
        .route(
            "/api/case-studies/",
            get(handlers::api::list_case_studies),
        )
        .route(
            "/api/case-studies/{*rest}",
            get(handlers::api::get_case_study),
        )
        .nest_service("/projects", static_service)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
