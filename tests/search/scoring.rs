//! Relevance values for known tickets.

use crate::common::{make_doc, ticket, HOUSING};
use giskb::scoring::{RelevanceScorer, TOPIC_WEIGHT};
use giskb::{Document, EngineConfig, FieldWeights, SearchEngine, SearchFilters};

const EPS: f64 = 1e-9;

fn relevance(engine: &SearchEngine<'_>, doc: &Document, query: &str) -> f64 {
    let docs = std::slice::from_ref(doc);
    engine
        .search(docs, Some(query), &SearchFilters::new())
        .first()
        .and_then(|h| h.relevance)
        .unwrap_or(0.0)
}

#[test]
fn test_roof_leak_scores_at_least_topic_weight() {
    let engine = SearchEngine::new(&HOUSING);
    let score = relevance(&engine, &make_doc("1", "Протечка крыши"), "крыша");
    assert!(score >= TOPIC_WEIGHT, "score {}", score);
}

#[test]
fn test_roof_leak_exact_value() {
    // "протечка" hits the topic (10) and fuzzy-contains it (5);
    // "крыша" vs "крыши" is one edit in five letters (10 × 0.8 × 0.5 = 4)
    let engine = SearchEngine::new(&HOUSING);
    let score = relevance(&engine, &make_doc("1", "Протечка крыши"), "крыша");
    assert!((score - 19.0).abs() < EPS, "score {}", score);
}

#[test]
fn test_sixty_views_add_exactly_three() {
    let engine = SearchEngine::new(&HOUSING);
    let cold = ticket("1", "Протечка крыши", &[], 0);
    let hot = ticket("2", "Протечка крыши", &[], 60);

    let delta = relevance(&engine, &hot, "крыша") - relevance(&engine, &cold, "крыша");
    assert!((delta - 3.0).abs() < EPS, "delta {}", delta);
}

#[test]
fn test_popularity_thresholds_are_strict() {
    let engine = SearchEngine::new(&HOUSING);
    let base = relevance(&engine, &ticket("0", "Лифт", &[], 0), "лифт");

    for (views, bonus) in [(10, 0.0), (11, 1.0), (50, 1.0), (51, 3.0)] {
        let score = relevance(&engine, &ticket("1", "Лифт", &[], views), "лифт");
        assert!((score - base - bonus).abs() < EPS, "views {}", views);
    }
}

#[test]
fn test_views_alone_never_match() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = vec![ticket("1", "Вывоз мусора", &[], 500)];
    assert!(engine
        .search(&docs, Some("домофон"), &SearchFilters::new())
        .is_empty());
}

#[test]
fn test_typo_in_query_still_finds_topic() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = vec![make_doc("1", "Не работает домофон"), make_doc("2", "Уборка подъезда")];

    let hits = engine.search(&docs, Some("домафон"), &SearchFilters::new());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.id, "1");
    // fuzzy only: 10 × (1 - 1/7) × 0.5
    let expected = TOPIC_WEIGHT * (1.0 - 1.0 / 7.0) * 0.5;
    assert!((hits[0].relevance.unwrap_or(0.0) - expected).abs() < EPS);
}

#[test]
fn test_secondary_fields_contribute() {
    let engine = SearchEngine::new(&HOUSING);
    let mut doc = make_doc("1", "Обращение");
    doc.executor = "ООО Лифтсервис".to_string();
    // "лифтсервис" contains "лифт" → executor weight only
    let score = relevance(&engine, &doc, "лифт");
    assert!((score - 3.0).abs() < EPS, "score {}", score);
}

#[test]
fn test_custom_weights_change_ranking() {
    let mut by_executor = make_doc("1", "Обращение");
    by_executor.executor = "Лифтсервис".to_string();
    let mut by_address = make_doc("2", "Обращение");
    by_address.address = "ул. Лифтовая, д. 1".to_string();
    let docs = vec![by_address, by_executor];

    let default_engine = SearchEngine::new(&HOUSING);
    let hits = default_engine.search(&docs, Some("лифт"), &SearchFilters::new());
    // equal weights: store order decides
    assert_eq!(hits[0].document.id, "2");

    let config = EngineConfig {
        weights: FieldWeights {
            executor: 5.0,
            ..FieldWeights::default()
        },
        ..EngineConfig::default()
    };
    let tuned = SearchEngine::with_config(&HOUSING, config);
    let hits = tuned.search(&docs, Some("лифт"), &SearchFilters::new());
    assert_eq!(hits[0].document.id, "1");
}

#[test]
fn test_scorer_is_usable_directly() {
    let scorer = RelevanceScorer::default();
    let terms = HOUSING.expand("ИПУ");
    let doc = make_doc("1", "Поверка водомера");
    assert!(scorer.score(&doc, &terms) > 0.0);
}
