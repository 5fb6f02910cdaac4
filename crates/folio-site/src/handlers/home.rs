//! Home Page Handler

use axum::extract::State;
use axum::response::IntoResponse;

use crate::state::AppState;
use crate::templates::HomeTemplate;

/// Handler for the landing page.
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        page_title: state.site_title().to_string(),
        profile: state.profile(),
        about_html: state.about_html().to_string(),
    }
}
