//! Static biographical data behind the home page.

use serde::Serialize;

use crate::catalog::CaseStudyId;

/// The site owner's profile.
#[derive(Debug, Serialize)]
pub struct Profile {
    /// Full display name.
    pub name: &'static str,
    /// One-line welcome shown in the hero.
    pub headline: &'static str,
    /// Short role description under the headline.
    pub tagline: &'static str,
    /// "About Me" paragraphs, in Markdown.
    pub about: &'static [&'static str],
    /// Projects highlighted on the home page, in display order.
    pub featured: &'static [FeaturedProject],
    /// How to get in touch.
    pub contact: Contact,
}

/// A project card on the home page.
#[derive(Debug, Serialize)]
pub struct FeaturedProject {
    pub title: &'static str,
    pub summary: &'static str,
    /// Case study with the full write-up, if there is one.
    pub case_study: Option<CaseStudyId>,
}

impl FeaturedProject {
    /// Link to the case study detail page, if any.
    pub fn href(&self) -> Option<String> {
        self.case_study.map(|id| format!("/case-studies/{id}"))
    }
}

/// Contact details.
#[derive(Debug, Serialize)]
pub struct Contact {
    pub email: &'static str,
    /// LinkedIn profile, without scheme.
    pub linkedin: &'static str,
}

impl Contact {
    /// `mailto:` link for the email address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Absolute LinkedIn URL.
    pub fn linkedin_url(&self) -> String {
        format!("https://{}", self.linkedin)
    }
}

static PROFILE: Profile = Profile {
    name: "Simone A. Lattimore",
    headline: "Welcome to my portfolio.",
    tagline: "Computer Science graduate & incoming UI/UX researcher and designer.",
    about: &[
        "I'm a **Georgia State University** Computer Science graduate dedicated to \
         understanding the psychological principles behind digital interaction. I apply \
         programming and behavioral research to design accessible tools that align with \
         human cognition.",
        "With a GPA of **3.47/4.00** and experience ranging from IT infrastructure to graphic \
         design, I focus on building software that solves real-world problems with a \
         human-centered approach.",
    ],
    featured: &[
        FeaturedProject {
            title: "Hive Calendar Project",
            summary: "Architected an automated dashboard using Power BI and Power Automate to \
                      display real-time availability of meeting rooms.",
            case_study: Some(CaseStudyId::Hive),
        },
        FeaturedProject {
            title: "Tutor In Your Area (TIYA)",
            summary: "Engineered a platform for students to find tutors based on proximity. \
                      Built with Java, JavaScript, MySQL, Firebase, and designed in Figma.",
            case_study: Some(CaseStudyId::Tiya),
        },
    ],
    contact: Contact {
        email: "Slattimore2@student.gsu.edu",
        linkedin: "linkedin.com/in/simonee8420",
    },
};

impl Profile {
    /// The compiled-in profile.
    pub fn builtin() -> &'static Profile {
        &PROFILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_featured_projects_link_to_catalog() {
        let catalog = Catalog::builtin();
        for project in Profile::builtin().featured {
            if let Some(id) = project.case_study {
                assert!(catalog.get(id.as_str()).is_some());
            }
        }
    }

    #[test]
    fn test_featured_href() {
        let hive = &Profile::builtin().featured[0];
        assert_eq!(hive.href().as_deref(), Some("/case-studies/hive"));

        let standalone = FeaturedProject {
            title: "Side project",
            summary: "No write-up yet",
            case_study: None,
        };
        assert!(standalone.href().is_none());
    }

    #[test]
    fn test_contact_links() {
        let contact = &Profile::builtin().contact;
        assert_eq!(contact.mailto(), "mailto:Slattimore2@student.gsu.edu");
        assert_eq!(
            contact.linkedin_url(),
            "https://linkedin.com/in/simonee8420"
        );
    }

    #[test]
    fn test_about_is_markdown() {
        let about = Profile::builtin().about;
        assert_eq!(about.len(), 2);
        assert!(about[0].contains("**Georgia State University**"));
    }
}
