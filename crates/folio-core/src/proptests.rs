//! Property-based tests for catalog resolution.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::{Catalog, CaseStudyId};
    use crate::resolver::{resolve, resolve_path, RenderDecision};
    use proptest::prelude::*;

    fn any_id() -> impl Strategy<Value = CaseStudyId> {
        prop::sample::select(CaseStudyId::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_valid_id_yields_matching_detail(id in any_id()) {
            let decision = resolve(Catalog::builtin(), &[id.as_str()]).unwrap();
            match decision {
                RenderDecision::Detail { study } => prop_assert_eq!(study.id, id),
                RenderDecision::Listing { .. } => prop_assert!(false, "expected detail"),
            }
        }

        #[test]
        fn test_trailing_segments_are_ignored(
            id in any_id(),
            rest in prop::collection::vec("\\PC*", 0..5),
        ) {
            let mut segments = vec![id.as_str().to_string()];
            segments.extend(rest);
            let with_rest = resolve(Catalog::builtin(), &segments).unwrap();
            let alone = resolve(Catalog::builtin(), &[id.as_str()]).unwrap();
            prop_assert_eq!(with_rest, alone);
        }

        #[test]
        fn test_unknown_ids_are_not_found(requested in "\\PC*") {
            prop_assume!(CaseStudyId::ALL.iter().all(|id| id.as_str() != requested));
            let err = resolve(Catalog::builtin(), &[requested.as_str()]).unwrap_err();
            prop_assert!(err.is_not_found());
        }

        #[test]
        fn test_resolution_is_idempotent(segments in prop::collection::vec("[a-z]{0,8}", 0..4)) {
            let first = resolve(Catalog::builtin(), &segments);
            let second = resolve(Catalog::builtin(), &segments);
            match (first, second) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
                _ => prop_assert!(false, "resolution changed between calls"),
            }
        }

        #[test]
        fn test_path_form_matches_segment_form(id in any_id(), tail in "[a-z/]{0,12}") {
            let path = format!("{id}/{tail}");
            let via_path = resolve_path(Catalog::builtin(), Some(&path)).unwrap();
            let via_segments = resolve(Catalog::builtin(), &[id.as_str()]).unwrap();
            prop_assert_eq!(via_path, via_segments);
        }
    }
}
