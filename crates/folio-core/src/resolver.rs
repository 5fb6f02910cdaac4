//! Route-driven view resolution for the case studies section.
//!
//! Maps the path segments after `/case-studies` to a [`RenderDecision`]:
//!
//! | Segments                    | Decision                     |
//! |-----------------------------|------------------------------|
//! | none                        | `Listing` of the full catalog |
//! | `[id, ..]`, `id` in catalog | `Detail` of that record      |
//! | `[id, ..]`, unknown `id`    | `Error::NotFound`            |
//!
//! Only the first segment is consulted. Anything after it is ignored, the same
//! way a catch-all route swallows trailing segments; a request for
//! `/case-studies/tiya/extra` renders the tiya detail page.
//!
//! Resolution is a pure function of its inputs and the static catalog.
//!
//! # Usage
//!
//! ```rust
//! use folio_core::catalog::{Catalog, CaseStudyId};
//! use folio_core::resolver::{resolve, RenderDecision};
//!
//! let catalog = Catalog::builtin();
//!
//! let decision = resolve(catalog, &["tiya", "extra", "stuff"]).unwrap();
//! match decision {
//!     RenderDecision::Detail { study } => assert_eq!(study.id, CaseStudyId::Tiya),
//!     RenderDecision::Listing { .. } => unreachable!(),
//! }
//!
//! assert!(resolve(catalog, &["unknown-id"]).unwrap_err().is_not_found());
//! ```

use serde::Serialize;

use crate::catalog::{CaseStudy, Catalog};
use crate::{Error, Result};

/// Which view the caller should render, and the data to render it with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum RenderDecision {
    /// Every case study, in catalog order.
    Listing {
        /// The whole catalog, unchanged.
        studies: &'static [CaseStudy],
    },
    /// A single case study.
    Detail {
        /// The matched record.
        study: &'static CaseStudy,
    },
}

impl RenderDecision {
    /// Short name of the view, as used in logs and JSON.
    pub fn view(&self) -> &'static str {
        match self {
            Self::Listing { .. } => "listing",
            Self::Detail { .. } => "detail",
        }
    }

    /// Returns `true` for the listing view.
    pub fn is_listing(&self) -> bool {
        matches!(self, Self::Listing { .. })
    }
}

/// Resolve route segments against the catalog.
///
/// An empty slice is the "absent" case and yields the listing. Otherwise the
/// first segment is matched exactly (case-sensitive) against catalog ids and
/// the rest are ignored.
pub fn resolve<S: AsRef<str>>(catalog: Catalog, segments: &[S]) -> Result<RenderDecision> {
    let Some(requested) = segments.first() else {
        return Ok(RenderDecision::Listing {
            studies: catalog.all(),
        });
    };

    let requested = requested.as_ref();
    catalog
        .get(requested)
        .map(|study| RenderDecision::Detail { study })
        .ok_or_else(|| Error::not_found(requested))
}

/// Resolve the remainder of a catch-all route such as `"tiya/extra/stuff"`.
///
/// Empty segments (leading, trailing, or doubled slashes) are dropped before
/// resolving, so `None`, `""` and `"/"` all yield the listing.
pub fn resolve_path(catalog: Catalog, rest: Option<&str>) -> Result<RenderDecision> {
    let segments: Vec<&str> = rest
        .unwrap_or_default()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    resolve(catalog, &segments)
}
