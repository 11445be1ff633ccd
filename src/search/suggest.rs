// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-ahead topic suggestions.

use std::collections::HashSet;

use crate::types::Document;
use crate::utils::{char_len, normalize};

use super::SearchEngine;

/// Prefixes shorter than this get no suggestions.
pub const MIN_SUGGEST_LEN: usize = 2;

impl SearchEngine<'_> {
    /// Distinct topics, in document order, whose normalized form contains any
    /// term of the expanded `prefix`. At most `suggestion_limit` of them.
    pub fn suggest(&self, documents: &[Document], prefix: &str) -> Vec<String> {
        if char_len(prefix) < MIN_SUGGEST_LEN {
            return Vec::new();
        }

        let terms = self.synonyms().expand(prefix);
        if terms.is_empty() {
            return Vec::new();
        }

        let limit = self.config().suggestion_limit;
        let mut seen: HashSet<&str> = HashSet::new();
        let mut suggestions = Vec::new();

        for doc in documents {
            if suggestions.len() >= limit {
                break;
            }
            if doc.topic.is_empty() || seen.contains(doc.topic.as_str()) {
                continue;
            }
            let topic = normalize(&doc.topic);
            if terms.iter().any(|term| topic.contains(term.as_str())) {
                seen.insert(doc.topic.as_str());
                suggestions.push(doc.topic.clone());
            }
        }

        suggestions
    }
}
