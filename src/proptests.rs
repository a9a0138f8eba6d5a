//! Property-based tests for truename resolution.
//!
//! Note: the expand module already has property tests for expansion. This
//! module focuses on resolver-level behavior with a raised case count.

use proptest::prelude::*;
use std::path::Path;

use crate::expand::has_trailing_separator;
use crate::truename::Truename;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

// Paths rooted under a directory that does not exist, so canonicalization
// always takes the not-found branch.
fn missing_path_strategy() -> impl Strategy<Value = String> {
    absolute_path_strategy().prop_map(|p| format!("/truename-proptest-missing{p}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Resolution is idempotent: resolve(resolve(p)) == resolve(p)
    #[test]
    fn resolution_idempotent(path in absolute_path_strategy()) {
        let resolver = Truename::native();
        if let Ok(once) = resolver.resolve(&path) {
            if let Ok(twice) = resolver.resolve(&once) {
                prop_assert_eq!(once, twice);
            }
        }
    }

    // Resolved paths are always absolute
    #[test]
    fn resolved_paths_absolute(path in absolute_path_strategy()) {
        let resolver = Truename::native();
        if let Ok(resolved) = resolver.resolve(&path) {
            prop_assert!(Path::new(&resolved).is_absolute());
        }
    }

    // A missing target resolves to itself: the input is already absolute
    // and free of dot segments, so expansion leaves it alone and the
    // not-found fallback returns it unchanged
    #[test]
    fn missing_target_resolves_to_expansion(path in missing_path_strategy()) {
        let resolver = Truename::native();
        let resolved = resolver.resolve(&path).unwrap();
        prop_assert_eq!(resolved, path);
    }

    // A directory-name input yields a directory-name result
    #[test]
    fn directory_name_input_keeps_convention(path in missing_path_strategy()) {
        let resolver = Truename::native();
        let resolved = resolver.resolve(&format!("{path}/")).unwrap();
        prop_assert!(has_trailing_separator(&resolved));
    }
}
