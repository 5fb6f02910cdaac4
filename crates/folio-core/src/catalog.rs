//! The case study catalog.
//!
//! The catalog is a compiled-in, ordered table of [`CaseStudy`] records. It is
//! never mutated at runtime: every request reads the same `static` slice, so
//! handlers can share it freely across threads without coordination.
//!
//! # Usage
//!
//! ```rust
//! use folio_core::catalog::{Catalog, CaseStudyId};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.len(), 3);
//!
//! let tiya = catalog.get("tiya").unwrap();
//! assert_eq!(tiya.id, CaseStudyId::Tiya);
//! assert!(catalog.get("Tiya").is_none());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::Error;

// ============================================================================
// CaseStudyId
// ============================================================================

/// Identifier of a case study. The set is closed and known at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStudyId {
    /// Hive meeting rooms display.
    Hive,
    /// Tutor In Your Area.
    Tiya,
    /// A Taste of Freedom flyer.
    Freedom,
}

impl CaseStudyId {
    /// All ids, in catalog display order.
    pub const ALL: [CaseStudyId; 3] = [Self::Hive, Self::Tiya, Self::Freedom];

    /// The route token for this id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hive => "hive",
            Self::Tiya => "tiya",
            Self::Freedom => "freedom",
        }
    }
}

impl fmt::Display for CaseStudyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStudyId {
    type Err = Error;

    /// Exact, case-sensitive match on the route token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::not_found(s))
    }
}

// ============================================================================
// PreviewKind
// ============================================================================

/// How a case study's preview is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    /// `preview_src` is an external page embedded in an iframe.
    Iframe,
    /// `preview_src` is a local image asset path.
    Image,
}

impl PreviewKind {
    /// Returns `true` for embedded external content.
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Iframe)
    }
}

// ============================================================================
// CaseStudy
// ============================================================================

/// A single case study. All fields are compile-time constants.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub id: CaseStudyId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub role: &'static str,
    pub timeline: &'static str,

    pub overview: &'static str,
    pub context: &'static str,

    pub what_i_built: &'static [&'static str],
    pub design_choices: &'static [&'static str],
    pub outcome: &'static [&'static str],

    pub preview_type: PreviewKind,
    pub preview_src: &'static str,
}

impl CaseStudy {
    /// Site-relative URL of this case study's detail page.
    pub fn href(&self) -> String {
        format!("/case-studies/{}", self.id)
    }
}

static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        id: CaseStudyId::Hive,
        title: "Hive Meeting Rooms Display",
        subtitle: "A lobby TV calendar that shows availability for five meeting rooms",
        role: "Developer, UX-focused implementation",
        timeline: "Work project",
        overview: "A TV-friendly calendar view that shows meeting room availability in a day \
                   format. Designed for quick scanning in a shared public space.",
        context: "This display runs on a TV in Hive\u{2019}s Headquarters building. Clients, \
                  employees, and guests can check room availability without asking staff or \
                  opening another tool.",
        what_i_built: &[
            "A day-style calendar layout optimized for distance viewing",
            "A consolidated view of availability across five meeting rooms",
            "A stable display experience intended for continuous use on a TV",
        ],
        design_choices: &[
            "Large readable sections so people can scan quickly while walking by",
            "Simple layout that avoids visual noise on shared screens",
            "A clear structure that supports quick decisions without explanation",
        ],
        outcome: &[
            "Makes availability obvious in high-traffic areas",
            "Helps reduce basic availability questions directed to staff",
            "Creates a more polished experience for visitors in the lobby",
        ],
        preview_type: PreviewKind::Iframe,
        preview_src: "https://hivefs-meetingrooms.netlify.app/",
    },
    CaseStudy {
        id: CaseStudyId::Tiya,
        title: "T.I.Y.A \u{2013} Tutor In Your Area",
        subtitle: "Tutor discovery with account-based access and flexible session types",
        role: "Full-stack contributor, UI design",
        timeline: "Course project",
        overview: "A tutoring platform that helps students find nearby tutors and choose how \
                   they want to meet: in person, virtual, or group.",
        context: "Students need a simple way to browse tutors, compare options, and decide what \
                  session format works best. The platform supports accounts and flows that \
                  guide users from discovery to session choice.",
        what_i_built: &[
            "An account-based experience for browsing and interacting with tutors",
            "UI that supports browsing, comparing, and decision-making",
            "Session type options built into the experience: in person, virtual, group",
        ],
        design_choices: &[
            "Clear information hierarchy so users can compare tutors quickly",
            "Simple structure so the experience feels easy to navigate",
            "Preview image highlights the product layout and overall feel",
        ],
        outcome: &[
            "Helps students discover local tutor options more easily",
            "Supports different learning preferences through multiple session formats",
            "Creates a structured experience from browsing to choosing how to meet",
        ],
        preview_type: PreviewKind::Image,
        preview_src: "/projects/tiya-preview.png",
    },
    CaseStudy {
        id: CaseStudyId::Freedom,
        title: "A Taste of Freedom",
        subtitle: "Community-facing promotional flyer for Flaming Heart Ministries",
        role: "Graphic designer",
        timeline: "Design project",
        overview: "A flyer created to invite the community to Flaming Heart Ministries events, \
                   including food-focused gatherings.",
        context: "The goal was to make something inviting and easy to read across both print \
                  and digital formats. The layout needed to communicate the message quickly \
                  while still feeling warm and welcoming.",
        what_i_built: &[
            "A flyer layout with clear hierarchy and strong readability",
            "Typography choices that make key details easy to locate",
            "A design that works for print and for sharing online",
        ],
        design_choices: &[
            "Headline-first structure so people instantly understand the purpose",
            "Readable type sizes and spacing for quick scanning",
            "Balanced layout so information feels organized, not crowded",
        ],
        outcome: &[
            "Supports outreach by making the event message easy to understand",
            "Designed to be shareable across community channels",
            "Keeps details clear and readable at a glance",
        ],
        preview_type: PreviewKind::Image,
        preview_src: "/projects/freedom-preview.png",
    },
];

// ============================================================================
// Catalog
// ============================================================================

/// Read-only view over the ordered case study table.
///
/// Cheap to copy; it is a single slice reference.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    studies: &'static [CaseStudy],
}

impl Catalog {
    /// The compiled-in catalog: hive, tiya, freedom.
    pub fn builtin() -> Self {
        Self {
            studies: &CASE_STUDIES,
        }
    }

    /// All case studies in display order.
    pub fn all(&self) -> &'static [CaseStudy] {
        self.studies
    }

    /// Number of case studies.
    pub fn len(&self) -> usize {
        self.studies.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.studies.is_empty()
    }

    /// Look up a case study by exact, case-sensitive id.
    pub fn get(&self, id: &str) -> Option<&'static CaseStudy> {
        self.studies.iter().find(|study| study.id.as_str() == id)
    }

    /// The ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = CaseStudyId> {
        self.studies.iter().map(|study| study.id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Tests
// ============================================================================
