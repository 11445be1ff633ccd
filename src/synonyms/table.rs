// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The synonym table and its reverse index.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::ConfigError;
use crate::utils::normalize;

use super::housing::HOUSING_SYNONYMS;

/// Normalized query terms after synonym expansion. Ordered, so scoring sums
/// floating-point contributions in the same order on every run.
pub type ExpandedTerms = BTreeSet<String>;

/// One cluster of synonyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    /// Canonical term, as authored.
    pub key: String,
    /// Alternative surface forms, as authored.
    pub variants: Vec<String>,
    /// `key` followed by `variants`, each normalized. What expansion emits.
    normalized: Vec<String>,
}

impl Concept {
    fn new(key: &str, variants: &[String]) -> Self {
        let normalized = std::iter::once(key)
            .chain(variants.iter().map(String::as_str))
            .map(normalize)
            .filter(|term| !term.is_empty())
            .collect();

        Self {
            key: key.to_string(),
            variants: variants.to_vec(),
            normalized,
        }
    }

    /// Normalized concept key and variants.
    pub fn terms(&self) -> &[String] {
        &self.normalized
    }
}

/// Immutable thesaurus: concepts plus a reverse index from every normalized
/// surface form to its concept.
///
/// **Invariant**: each normalized key or variant resolves to exactly one concept.
/// If the authored table lists a form under two concepts, the later concept wins.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    concepts: Vec<Concept>,
    reverse: HashMap<String, usize>,
}

impl SynonymTable {
    /// Build a table from `(concept, variants)` pairs in authoring order.
    pub fn new<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut concepts = Vec::new();
        let mut reverse = HashMap::new();

        for (key, variants) in entries {
            let variants: Vec<String> = variants.into_iter().map(Into::into).collect();
            let concept = Concept::new(key.as_ref(), &variants);
            let idx = concepts.len();
            for term in concept.terms() {
                reverse.insert(term.clone(), idx);
            }
            concepts.push(concept);
        }

        Self { concepts, reverse }
    }

    /// The built-in housing-management thesaurus.
    pub fn housing() -> Self {
        Self::new(
            HOUSING_SYNONYMS
                .iter()
                .map(|(key, variants)| (*key, variants.iter().copied())),
        )
    }

    /// Load a thesaurus from a JSON object mapping concept → array of variants.
    /// Object order is the authoring order.
    pub fn from_json<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_reader(reader)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (key, value) in raw {
            let variants: Vec<String> = serde_json::from_value(value).map_err(|e| {
                ConfigError::Invalid(format!("variants of {:?} must be strings: {}", key, e))
            })?;
            entries.push((key, variants));
        }
        Ok(Self::new(entries))
    }

    /// Load a thesaurus file. See [`SynonymTable::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = fs::File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(std::io::BufReader::new(file))
    }

    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// The concept a normalized word belongs to, if any.
    pub fn concept_of(&self, word: &str) -> Option<&Concept> {
        self.reverse.get(word).map(|&idx| &self.concepts[idx])
    }

    /// Broaden a raw query into normalized search terms.
    ///
    /// Every normalized query word is kept verbatim. A word found in the reverse
    /// index also brings its concept key and every variant of that concept.
    /// Multi-word variants ("прибор учета") are emitted as whole phrases.
    pub fn expand(&self, query: &str) -> ExpandedTerms {
        let normalized = normalize(query);
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let mut expanded: ExpandedTerms = words.iter().map(|w| (*w).to_string()).collect();

        for word in words {
            if let Some(concept) = self.concept_of(word) {
                expanded.extend(concept.terms().iter().cloned());
            }
        }

        expanded
    }
}
