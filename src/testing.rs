// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benchmarks.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplicating ticket boilerplate.

#![doc(hidden)]

use crate::types::Document;

/// Create a document with just an id and a topic.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, topic: &str) -> Document {
    Document {
        id: id.to_string(),
        topic: topic.to_string(),
        ..Default::default()
    }
}

/// Create a document with an id, topic and tags.
pub fn make_tagged_doc(id: &str, topic: &str, tags: &[&str]) -> Document {
    Document {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_doc(id, topic)
    }
}

/// Create a document with a status and a date, for filter tests.
pub fn make_dated_doc(id: &str, topic: &str, status: &str, date: &str) -> Document {
    Document {
        status: status.to_string(),
        date: date.to_string(),
        ..make_doc(id, topic)
    }
}

const TOPICS: &[&str] = &[
    "Протечка крыши",
    "Не работает лифт",
    "Замена счетчика воды",
    "Нет горячей воды",
    "Холодные батареи",
    "Уборка подъезда",
    "Вывоз мусора",
    "Сломан домофон",
    "Перерасчет за отопление",
    "Ошибка в квитанции",
    "Шум от соседей",
    "Запах канализации в подвале",
    "Граффити на стенах",
    "Не горит свет во дворе",
    "Жалоба на управляющую компанию",
];

const TAGS: &[&str] = &[
    "Кровля", "Лифт", "Счетчики", "Вода", "Отопление", "Уборка", "Мусор", "Домофон",
    "Начисления", "Благоустройство", "Жалобы",
];

const EXECUTORS: &[&str] = &["УК Комфорт", "ТСЖ Заря", "ООО Лифтсервис", "ЕИРЦ"];

const STATUSES: &[&str] = &["Новое", "В работе", "Исполнено"];

/// Deterministic synthetic ticket corpus of `size` documents.
pub fn sample_corpus(size: usize) -> Vec<Document> {
    (0..size)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            Document {
                id: (i + 1).to_string(),
                topic: topic.to_string(),
                topic_code: format!("ЖКХ-{:03}", i % 97),
                number: format!("{}-{:05}", 100 + i % 9, i),
                address: format!("г. Москва, ул. Ленина, д. {}, кв. {}", i % 40 + 1, i % 120 + 1),
                executor: EXECUTORS[i % EXECUTORS.len()].to_string(),
                status: STATUSES[i % STATUSES.len()].to_string(),
                appeal_text: format!("Обращение жильца: {}. Прошу принять меры.", topic.to_lowercase()),
                response_text: "Заявка принята, работы выполнены в установленный срок.".to_string(),
                tags: vec![
                    TAGS[i % TAGS.len()].to_string(),
                    TAGS[(i * 7 + 3) % TAGS.len()].to_string(),
                ],
                date: format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                views: (i as u64 * 13) % 80,
                created_at: None,
                updated_at: None,
            }
        })
        .collect()
}
