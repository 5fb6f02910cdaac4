//! Application State
//!
//! Arc-wrapped state shared across handlers. Everything in it is read-only
//! after construction.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use folio_core::{Catalog, Profile};

use crate::markdown::render_paragraphs;

/// Default site title.
pub const DEFAULT_TITLE: &str = "Simone A. Lattimore";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    catalog: Catalog,
    profile: &'static Profile,
    about_html: String,
    site_title: String,
    static_dir: PathBuf,
}

impl AppState {
    /// Create state for a site with the given title and static asset root.
    pub fn new(site_title: impl Into<String>, static_dir: impl Into<PathBuf>) -> Self {
        let profile = Profile::builtin();
        Self {
            inner: Arc::new(InnerState {
                catalog: Catalog::builtin(),
                profile,
                about_html: render_paragraphs(profile.about),
                site_title: site_title.into(),
                static_dir: static_dir.into(),
            }),
        }
    }

    /// The case study catalog.
    pub fn catalog(&self) -> Catalog {
        self.inner.catalog
    }

    /// The profile behind the home page.
    pub fn profile(&self) -> &'static Profile {
        self.inner.profile
    }

    /// The profile's "About" text, rendered once at startup.
    pub fn about_html(&self) -> &str {
        &self.inner.about_html
    }

    /// Title used in every page's `<title>`.
    pub fn site_title(&self) -> &str {
        &self.inner.site_title
    }

    /// Root directory for static assets.
    pub fn static_dir(&self) -> &Path {
        &self.inner.static_dir
    }

    /// Compose a page title: `"{page} | {site}"`.
    pub fn page_title(&self, page: &str) -> String {
        format!("{page} | {}", self.inner.site_title)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, "public")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.site_title(), DEFAULT_TITLE);
        assert_eq!(state.static_dir(), Path::new("public"));
        assert_eq!(state.catalog().len(), 3);
        assert!(state.about_html().starts_with("<p>"));
    }

    #[test]
    fn test_page_title() {
        let state = AppState::new("Portfolio", "assets");
        assert_eq!(state.page_title("Case Studies"), "Case Studies | Portfolio");
    }

    #[test]
    fn test_clones_share_inner() {
        let a = AppState::default();
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.inner, &b.inner));
    }
}
