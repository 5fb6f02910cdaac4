//! Askama Templates
//!
//! Template structs for rendering HTML pages. Every page extends
//! `templates/base.html`, which reads `page_title`.

use askama::Template;
use askama_web::WebTemplate;
use folio_core::{CaseStudy, Profile};

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page_title: String,
    pub profile: &'static Profile,
    /// "About Me" section, already rendered from Markdown.
    pub about_html: String,
}

/// Case study listing template.
#[derive(Template, WebTemplate)]
#[template(path = "case_studies/index.html")]
pub struct CaseStudyListTemplate {
    pub page_title: String,
    pub studies: &'static [CaseStudy],
}

/// Single case study template.
#[derive(Template, WebTemplate)]
#[template(path = "case_studies/detail.html")]
pub struct CaseStudyDetailTemplate {
    pub page_title: String,
    pub study: &'static CaseStudy,
}

/// 404 page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub page_title: String,
}

impl NotFoundTemplate {
    pub fn new() -> Self {
        Self {
            page_title: "Not Found".to_string(),
        }
    }
}

impl Default for NotFoundTemplate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Catalog;

    #[test]
    fn test_detail_renders_iframe_preview() {
        let study = Catalog::builtin().get("hive").unwrap();
        let html = CaseStudyDetailTemplate {
            page_title: "Hive".to_string(),
            study,
        }
        .render()
        .unwrap();

        assert!(html.contains("<iframe"));
        assert!(html.contains("https://hivefs-meetingrooms.netlify.app/"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_detail_renders_image_preview() {
        let study = Catalog::builtin().get("freedom").unwrap();
        let html = CaseStudyDetailTemplate {
            page_title: "Freedom".to_string(),
            study,
        }
        .render()
        .unwrap();

        assert!(html.contains("<img"));
        assert!(html.contains("/projects/freedom-preview.png"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_detail_renders_all_sections() {
        let study = Catalog::builtin().get("tiya").unwrap();
        let html = CaseStudyDetailTemplate {
            page_title: "TIYA".to_string(),
            study,
        }
        .render()
        .unwrap();

        for heading in ["Overview", "Context", "What I Built", "Design Choices", "Outcome"] {
            assert!(html.contains(heading), "missing section {heading}");
        }
        for item in study.what_i_built.iter().chain(study.outcome) {
            assert!(html.contains(item), "missing item {item}");
        }
        assert!(html.contains("Course project"));
        assert!(html.contains("Back to case studies"));
    }

    #[test]
    fn test_listing_links_every_study_in_order() {
        let studies = Catalog::builtin().all();
        let html = CaseStudyListTemplate {
            page_title: "Case Studies".to_string(),
            studies,
        }
        .render()
        .unwrap();

        let positions: Vec<usize> = studies
            .iter()
            .map(|s| html.find(&s.href()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("Open case study").count(), studies.len());
    }

    #[test]
    fn test_page_title_in_head() {
        let html = NotFoundTemplate::new().render().unwrap();
        assert!(html.contains("<title>Not Found</title>"));
    }
}
