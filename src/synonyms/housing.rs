// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Built-in housing-management thesaurus.
//!
//! Variants include regional terms, abbreviations and the `ё` spellings operators
//! actually type. Spellings that only differ by `ё` collapse to one reverse-index
//! entry after normalization; they are kept so the table reads like the source data.

/// Concept key → variants, in table order.
pub const HOUSING_SYNONYMS: &[(&str, &[&str])] = &[
    (
        "счетчик",
        &[
            "счётчик",
            "ипу",
            "прибор учета",
            "прибор учёта",
            "водомер",
            "электросчетчик",
            "электросчётчик",
            "теплосчетчик",
            "теплосчётчик",
            "одпу",
            "индивидуальный прибор",
        ],
    ),
    (
        "уборка",
        &[
            "клининг",
            "мытье",
            "мытьё",
            "чистка",
            "санитарная обработка",
            "влажная уборка",
        ],
    ),
    (
        "подъезд",
        &["парадная", "лестничная клетка", "лестница", "мкд", "мопы", "моп"],
    ),
    (
        "вандализм",
        &["порча", "повреждение", "разрушение", "граффити", "надписи", "рисунки"],
    ),
    (
        "отопление",
        &[
            "тепло",
            "батареи",
            "радиаторы",
            "теплоснабжение",
            "отопительный сезон",
            "холодно",
        ],
    ),
    (
        "вода",
        &[
            "водоснабжение",
            "гвс",
            "хвс",
            "горячая вода",
            "холодная вода",
            "водопровод",
            "напор",
        ],
    ),
    (
        "лифт",
        &["лифтовое оборудование", "подъемник", "подъёмник", "кабина лифта"],
    ),
    (
        "освещение",
        &["свет", "лампа", "лампочка", "светильник", "фонарь", "темно", "темнота"],
    ),
    (
        "крыша",
        &["кровля", "протечка", "течь", "течет", "течёт", "капает"],
    ),
    (
        "мусор",
        &["тбо", "тко", "отходы", "мусоропровод", "контейнер", "бак"],
    ),
    ("домофон", &["дверь", "замок", "ключ", "доступ", "вход"]),
    (
        "квитанция",
        &["платежка", "платёжка", "счет", "счёт", "еирц", "оплата", "начисление"],
    ),
    (
        "перерасчет",
        &["перерасчёт", "возврат", "корректировка", "пересчет", "пересчёт"],
    ),
    ("ремонт", &["восстановление", "починка", "устранение", "работы"]),
    (
        "двор",
        &["придомовая территория", "благоустройство", "площадка", "парковка"],
    ),
    ("шум", &["громко", "громкий", "звук", "грохот", "стук"]),
    ("запах", &["вонь", "воняет", "пахнет", "канализация", "газ"]),
    (
        "жалоба",
        &["претензия", "заявление", "обращение", "недовольство"],
    ),
    (
        "управляющая компания",
        &["ук", "управляющая организация", "уо", "жэк", "жкх", "тсж", "тсн"],
    ),
];
