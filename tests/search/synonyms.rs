//! Queries find tickets written with a different word for the same thing.

use crate::common::{hit_ids, make_doc, temp_json, HOUSING};
use giskb::{SearchEngine, SearchFilters, SynonymTable};

#[test]
fn test_abbreviation_finds_canonical_term() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = vec![
        make_doc("1", "Замена счетчика"),
        make_doc("2", "Поверка водомера"),
        make_doc("3", "Уборка подъезда"),
    ];

    let hits = engine.search(&docs, Some("ИПУ"), &SearchFilters::new());
    let mut found = hit_ids(&hits);
    found.sort();
    assert_eq!(found, vec!["1", "2"]);
}

#[test]
fn test_yo_spelling_is_irrelevant() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = vec![make_doc("1", "Замена счётчика"), make_doc("2", "Замена счетчика")];

    for query in ["счётчик", "счетчик", "СЧЁТЧИК"] {
        let hits = engine.search(&docs, Some(query), &SearchFilters::new());
        assert_eq!(hit_ids(&hits), vec!["1", "2"], "query {:?}", query);
        assert_eq!(hits[0].relevance, hits[1].relevance);
    }
}

#[test]
fn test_multi_word_variant_matches_as_phrase() {
    let engine = SearchEngine::new(&HOUSING);
    let mut phrase = make_doc("1", "Обращение");
    phrase.appeal_text = "Прошу опломбировать прибор учета".to_string();
    let mut scattered = make_doc("2", "Обращение");
    scattered.appeal_text = "Прибор сломан, учета нет".to_string();
    let docs = vec![phrase, scattered];

    let hits = engine.search(&docs, Some("водомер"), &SearchFilters::new());
    assert_eq!(hit_ids(&hits), vec!["1"]);
}

#[test]
fn test_injected_thesaurus() {
    let file = temp_json(r#"{"шлагбаум": ["ворота", "въезд"]}"#);
    let table = SynonymTable::from_path(file.path()).unwrap();
    let engine = SearchEngine::new(&table);
    let docs = vec![make_doc("1", "Не открываются ворота"), make_doc("2", "Счетчик")];

    let hits = engine.search(&docs, Some("шлагбаум"), &SearchFilters::new());
    assert_eq!(hit_ids(&hits), vec!["1"]);

    // the built-in table is not consulted
    assert!(engine.search(&docs, Some("ипу"), &SearchFilters::new()).is_empty());
}

#[test]
fn test_expansion_includes_every_variant() {
    let terms = HOUSING.expand("ипу");
    for expected in [
        "ипу",
        "счетчик",
        "прибор учета",
        "водомер",
        "электросчетчик",
        "теплосчетчик",
        "одпу",
        "индивидуальный прибор",
    ] {
        assert!(terms.contains(expected), "missing {:?}", expected);
    }
}
