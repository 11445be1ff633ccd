//! Result order: descending relevance, store order among equals.

use crate::common::{hit_ids, make_doc, sample_corpus, ticket, HOUSING};
use giskb::{SearchEngine, SearchFilters};

#[test]
fn test_topic_outranks_body_text() {
    let engine = SearchEngine::new(&HOUSING);
    let mut in_body = make_doc("body", "Обращение жильца");
    in_body.appeal_text = "В подъезде не работает лифт".to_string();
    let in_topic = make_doc("topic", "Лифт");
    let docs = vec![in_body, in_topic];

    let hits = engine.search(&docs, Some("лифт"), &SearchFilters::new());
    assert_eq!(hit_ids(&hits), vec!["topic", "body"]);
}

#[test]
fn test_relevance_is_non_increasing() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = sample_corpus(300);

    for query in ["течет крыша", "ИПУ", "лифт", "мусор во дворе", "горячая вода"] {
        let hits = engine.search(&docs, Some(query), &SearchFilters::new());
        assert!(!hits.is_empty(), "query {:?}", query);
        for pair in hits.windows(2) {
            let (a, b) = (pair[0].relevance, pair[1].relevance);
            assert!(a >= b, "query {:?}: {:?} before {:?}", query, a, b);
        }
        assert!(hits.iter().all(|h| h.relevance.is_some_and(|r| r > 0.0)));
    }
}

#[test]
fn test_equal_scores_keep_store_order() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = vec![
        ticket("c", "Лифт", &[], 0),
        ticket("a", "Крыша", &[], 0),
        ticket("b", "Лифт", &[], 0),
        ticket("d", "Лифт", &[], 0),
    ];

    let hits = engine.search(&docs, Some("лифт"), &SearchFilters::new());
    assert_eq!(hit_ids(&hits), vec!["c", "b", "d"]);
}

#[test]
fn test_popularity_breaks_exact_ties() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = vec![
        ticket("quiet", "Лифт", &[], 3),
        ticket("busy", "Лифт", &[], 70),
        ticket("mid", "Лифт", &[], 20),
    ];

    let hits = engine.search(&docs, Some("лифт"), &SearchFilters::new());
    assert_eq!(hit_ids(&hits), vec!["busy", "mid", "quiet"]);
}

#[test]
fn test_search_is_deterministic() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = sample_corpus(500);

    let first = engine.search(&docs, Some("счетчик воды"), &SearchFilters::new());
    for _ in 0..5 {
        let again = engine.search(&docs, Some("счетчик воды"), &SearchFilters::new());
        assert_eq!(hit_ids(&again), hit_ids(&first));
        let scores: Vec<_> = again.iter().map(|h| h.relevance).collect();
        let expected: Vec<_> = first.iter().map(|h| h.relevance).collect();
        assert_eq!(scores, expected);
    }
}
