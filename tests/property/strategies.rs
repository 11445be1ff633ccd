//! Input generators shared by the property suites.

use proptest::prelude::*;

use giskb::Document;

/// Short lowercase Cyrillic words, `ё` included.
pub fn cyrillic_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[а-яё]{1,9}").unwrap()
}

/// Words from the housing vocabulary, so synonym expansion actually fires.
pub fn housing_word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "ипу", "счётчик", "лифт", "крыша", "течёт", "мусор", "домофон", "квитанция", "свет",
        "отопление", "батарея", "подъезд", "двор", "шум", "запах", "ук", "гвс", "ремонт",
    ])
    .prop_map(str::to_string)
}

/// Free text: mixed case, punctuation, digits, Latin, irregular whitespace.
pub fn messy_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[А-Яа-яЁёA-Za-z0-9 \t\n.,;:!?№«»()_/-]{0,40}").unwrap()
}

/// A query made of a few words, some from the thesaurus.
pub fn query() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![cyrillic_word(), housing_word()], 1..4)
        .prop_map(|words| words.join(" "))
}

/// A small ticket collection with distinct ids.
pub fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (
            messy_text(),
            messy_text(),
            prop::collection::vec(housing_word(), 0..3),
            0u64..100,
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (topic, appeal_text, tags, views))| Document {
                id: i.to_string(),
                topic,
                appeal_text,
                tags,
                views,
                ..Default::default()
            })
            .collect()
    })
}
