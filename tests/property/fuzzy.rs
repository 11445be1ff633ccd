//! Edit distance against the `strsim` oracle, and fuzzy-match bounds.

use proptest::prelude::*;

use crate::strategies::{cyrillic_word, messy_text};
use giskb::{fuzzy_match, levenshtein_distance, normalize, DEFAULT_FUZZY_THRESHOLD};

proptest! {
    #[test]
    fn prop_distance_matches_oracle(a in cyrillic_word(), b in cyrillic_word()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_distance_symmetric(a in messy_text(), b in messy_text()) {
        prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
    }

    #[test]
    fn prop_distance_identity_and_empty(a in messy_text()) {
        prop_assert_eq!(levenshtein_distance(&a, &a), 0);
        prop_assert_eq!(levenshtein_distance("", &a), a.chars().count());
        prop_assert_eq!(levenshtein_distance(&a, ""), a.chars().count());
    }

    #[test]
    fn prop_distance_bounded_by_longer(a in cyrillic_word(), b in cyrillic_word()) {
        let d = levenshtein_distance(&a, &b);
        let (la, lb) = (a.chars().count(), b.chars().count());
        prop_assert!(d <= la.max(lb));
        prop_assert!(d >= la.abs_diff(lb));
    }

    #[test]
    fn prop_fuzzy_in_unit_range(text in messy_text(), q in cyrillic_word()) {
        let score = fuzzy_match(&text, &q, DEFAULT_FUZZY_THRESHOLD);
        prop_assert!((0.0..=1.0).contains(&score));
        prop_assert!(score == 0.0 || score >= DEFAULT_FUZZY_THRESHOLD);
    }

    #[test]
    fn prop_containment_is_one(prefix in messy_text(), q in cyrillic_word(), suffix in messy_text()) {
        // the query may be one or two letters; containment still wins
        let text = format!("{}{}{}", prefix, q, suffix);
        prop_assert_eq!(fuzzy_match(&text, &q, DEFAULT_FUZZY_THRESHOLD), 1.0);
    }

    #[test]
    fn prop_short_terms_need_containment(text in messy_text(), q in "[а-я]{1,2}") {
        let score = fuzzy_match(&text, &q, 0.0);
        let contained = normalize(&text).contains(&normalize(&q));
        prop_assert_eq!(score == 1.0, contained);
        prop_assert!(score == 0.0 || score == 1.0);
    }
}
