//! Structured filters, alone and combined with a query.

use crate::common::{hit_ids, make_dated_doc, make_tagged_doc, HOUSING};
use giskb::{Document, SearchEngine, SearchFilters};

fn statuses() -> Vec<Document> {
    vec![
        make_dated_doc("1", "Протечка крыши", "Новое", "2024-01-10"),
        make_dated_doc("2", "Не работает лифт", "Исполнено", "2024-02-10"),
        make_dated_doc("3", "Холодные батареи", "Новое", "2024-03-10"),
        make_dated_doc("4", "Вывоз мусора", "Исполнено", "2024-04-10"),
        make_dated_doc("5", "Сломан домофон", "Новое", "2024-05-10"),
    ]
}

#[test]
fn test_status_filter_keeps_order_without_relevance() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = statuses();

    let hits = engine.search(&docs, None, &SearchFilters::new().with_status("Новое"));
    assert_eq!(hit_ids(&hits), vec!["1", "3", "5"]);
    assert!(hits.iter().all(|h| h.relevance.is_none()));
    assert!(hits.iter().all(|h| h.document.status == "Новое"));
}

#[test]
fn test_date_range_is_inclusive() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = statuses();
    let filters = SearchFilters::new()
        .with_date_from("2024-02-10")
        .with_date_to("2024-04-10");

    let hits = engine.search(&docs, None, &filters);
    assert_eq!(hit_ids(&hits), vec!["2", "3", "4"]);
}

#[test]
fn test_undated_tickets_are_outside_every_date_bound() {
    let engine = SearchEngine::new(&HOUSING);
    let mut docs = statuses();
    docs.push(make_tagged_doc("6", "Протечка крыши", &[]));

    let hits = engine.search(&docs, None, &SearchFilters::new().with_date_to("2024-01-31"));
    assert_eq!(hit_ids(&hits), vec!["1"]);

    let hits = engine.search(&docs, None, &SearchFilters::new().with_date_from("2024-05-01"));
    assert_eq!(hit_ids(&hits), vec!["5"]);

    // without a date filter the undated ticket is still searchable
    let hits = engine.search(&docs, Some("крыша"), &SearchFilters::new());
    assert_eq!(hit_ids(&hits), vec!["1", "6"]);
}

#[test]
fn test_filters_are_conjunctive() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = statuses();
    let filters = SearchFilters::new()
        .with_status("Новое")
        .with_date_from("2024-02-01");

    let hits = engine.search(&docs, None, &filters);
    assert_eq!(hit_ids(&hits), vec!["3", "5"]);
}

#[test]
fn test_address_and_executor_are_fuzzy_on_case_and_punctuation() {
    let engine = SearchEngine::new(&HOUSING);
    let mut a = make_tagged_doc("a", "Лифт", &[]);
    a.address = "Санкт-Петербург г., ул. Садовая, д. 3".to_string();
    a.executor = "ООО «ЖилКомСервис №2»".to_string();
    let mut b = make_tagged_doc("b", "Лифт", &[]);
    b.address = "Санкт-Петербург г., пр. Невский, д. 30".to_string();
    b.executor = "ТСЖ Невский".to_string();
    let docs = vec![a, b];

    let by_address = engine.search(&docs, None, &SearchFilters::new().with_address("САДОВАЯ"));
    assert_eq!(hit_ids(&by_address), vec!["a"]);

    let by_executor = engine.search(&docs, None, &SearchFilters::new().with_executor("жилкомсервис 2"));
    assert_eq!(hit_ids(&by_executor), vec!["a"]);
}

#[test]
fn test_category_requires_exact_tag() {
    let engine = SearchEngine::new(&HOUSING);
    let docs = vec![
        make_tagged_doc("1", "Лифт", &["Лифт", "Аварийные"]),
        make_tagged_doc("2", "Лифт", &["лифт"]),
        make_tagged_doc("3", "Лифт", &["Лифтовое оборудование"]),
    ];

    let hits = engine.search(&docs, None, &SearchFilters::new().with_category("Лифт"));
    assert_eq!(hit_ids(&hits), vec!["1"]);
}

#[test]
fn test_filters_apply_before_scoring() {
    let engine = SearchEngine::new(&HOUSING);
    let mut popular = make_tagged_doc("1", "Протечка крыши", &["Кровля"]);
    popular.views = 100;
    popular.status = "Исполнено".to_string();
    let mut open = make_tagged_doc("2", "Течь с потолка", &["Кровля"]);
    open.status = "Новое".to_string();
    let docs = vec![popular, open];

    let hits = engine.search(&docs, Some("крыша"), &SearchFilters::new().with_status("Новое"));
    assert_eq!(hit_ids(&hits), vec!["2"]);
    assert!(hits[0].relevance.is_some());
}

#[test]
fn test_filters_deserialize_from_query_shape() {
    let json = r#"{"status": "Новое", "dateFrom": "2024-03-01", "category": ""}"#;
    let filters: SearchFilters = serde_json::from_str(json).unwrap();

    let docs = statuses();
    let engine = SearchEngine::new(&HOUSING);
    let hits = engine.search(&docs, None, &filters);
    assert_eq!(hit_ids(&hits), vec!["3", "5"]);
}
