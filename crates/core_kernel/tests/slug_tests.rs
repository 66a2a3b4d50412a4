//! Property tests for slug derivation

use core_kernel::slugify;
use proptest::prelude::*;

proptest! {
    #[test]
    fn slug_is_idempotent(name in ".{0,40}") {
        let once = slugify(&name);
        prop_assert_eq!(slugify(&once), once.clone());
    }

    #[test]
    fn slug_charset_is_restricted(name in ".{0,40}") {
        let slug = slugify(&name);
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn slug_has_no_edge_or_double_hyphens(name in "[a-zA-Z0-9 _!.-]{0,40}") {
        let slug = slugify(&name);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn slug_is_deterministic(name in "[A-Za-z ]{1,30}") {
        prop_assert_eq!(slugify(&name), slugify(&name));
    }
}
