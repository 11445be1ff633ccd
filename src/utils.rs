// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by every comparison in the crate.
//!
//! Ticket data is typed by hand by many operators, so the same word shows up as
//! "Счётчик", "счетчик" and "СЧЕТЧИК:". Everything is compared in one canonical
//! form:
//!
//! 1. NFC compose (with `unicode-normalization`), so `е + U+0308` becomes `ё`
//! 2. Lowercase (Unicode rules, correct for Cyrillic)
//! 3. Fold `ё` to `е`
//! 4. Replace anything that is not a Latin/Cyrillic letter, ASCII digit or whitespace with a space
//! 5. Collapse whitespace runs and trim
//!
//! The output only contains letters, digits and single spaces, so running it
//! again is a no-op.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching.
///
/// - "Протечка  крыши!" → "протечка крыши"
/// - "Счётчик (ИПУ)" → "счетчик ипу"
/// - "д.5, кв.12" → "д 5 кв 12"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    fold(&value.nfc().collect::<String>())
}

/// Normalization without NFC composition. Decomposed `ё` is not folded here.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    fold(value)
}

fn fold(value: &str) -> String {
    let mapped: String = value
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'ё' => 'е',
            c if is_word_char(c) || c.is_whitespace() => c,
            _ => ' ',
        })
        .collect();

    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Characters that survive normalization: Latin letters, Cyrillic letters, ASCII digits.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_digit() || (c.is_alphabetic() && (is_latin(c) || is_cyrillic(c)))
}

fn is_latin(c: char) -> bool {
    matches!(c,
        'a'..='z' | 'A'..='Z' |
        '\u{00C0}'..='\u{024F}' |  // Latin-1 Supplement, Extended-A, Extended-B
        '\u{1E00}'..='\u{1EFF}'    // Latin Extended Additional
    )
}

fn is_cyrillic(c: char) -> bool {
    matches!(c,
        '\u{0400}'..='\u{04FF}' |  // Cyrillic
        '\u{0500}'..='\u{052F}'    // Cyrillic Supplement
    )
}

/// Length in characters. Every length-based rule in the crate counts chars, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
