//! Whole-pipeline invariants over random collections.

use proptest::prelude::*;

use crate::common::HOUSING;
use crate::strategies::{documents, housing_word, query};
use giskb::{SearchEngine, SearchFilters};

proptest! {
    #[test]
    fn prop_no_query_no_filters_is_identity(docs in documents()) {
        let engine = SearchEngine::new(&HOUSING);
        let hits = engine.search(&docs, None, &SearchFilters::new());
        prop_assert_eq!(hits.len(), docs.len());
        for (hit, doc) in hits.iter().zip(&docs) {
            prop_assert!(std::ptr::eq(hit.document, doc));
            prop_assert!(hit.relevance.is_none());
        }
    }

    #[test]
    fn prop_hits_are_positive_and_sorted(docs in documents(), q in query()) {
        let engine = SearchEngine::new(&HOUSING);
        let hits = engine.search(&docs, Some(&q), &SearchFilters::new());
        prop_assert!(hits.len() <= docs.len());
        for hit in &hits {
            prop_assert!(hit.relevance.is_some_and(|r| r > 0.0));
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].relevance >= pair[1].relevance);
        }
    }

    #[test]
    fn prop_equal_scores_keep_input_order(docs in documents(), q in query()) {
        let engine = SearchEngine::new(&HOUSING);
        let hits = engine.search(&docs, Some(&q), &SearchFilters::new());
        for pair in hits.windows(2) {
            if pair[0].relevance == pair[1].relevance {
                let a: usize = pair[0].document.id.parse().unwrap();
                let b: usize = pair[1].document.id.parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }

    #[test]
    fn prop_category_filter_is_exact(docs in documents(), tag in housing_word()) {
        let engine = SearchEngine::new(&HOUSING);
        let filters = SearchFilters::new().with_category(tag.clone());
        let hits = engine.search(&docs, None, &filters);
        let expected = docs.iter().filter(|d| d.tags.contains(&tag)).count();
        prop_assert_eq!(hits.len(), expected);
    }

    #[test]
    fn prop_similar_bounds(docs in documents(), limit in 1usize..8) {
        let engine = SearchEngine::new(&HOUSING);
        if let Some(source) = docs.first() {
            let similar = engine.find_similar(source, &docs, limit);
            prop_assert!(similar.len() <= limit);
            if source.tags.is_empty() {
                prop_assert!(similar.is_empty());
            }
            for item in &similar {
                prop_assert!(item.document.id != source.id);
                prop_assert!(item.similarity > 0.0);
            }
        }
    }
}
