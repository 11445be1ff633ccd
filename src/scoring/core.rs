// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance.
//!
//! # Weights
//!
//! | Field         | Weight |
//! |---------------|--------|
//! | topic         | 10     |
//! | topic_code    | 8      |
//! | number        | 7      |
//! | tags          | 6      |
//! | response_text | 5      |
//! | appeal_text   | 4      |
//! | address       | 3      |
//! | executor      | 3      |
//!
//! For each expanded term independently:
//!
//! - every text field whose normalized value contains the term adds its full weight
//!   (binary: no credit for length or repeat occurrences)
//! - the tags weight is added once if any normalized tag contains the term
//! - a fuzzy topic similarity `s > 0` adds `topic_weight * s * 0.5`, on top of
//!   any exact topic hit
//!
//! Then, once per document, popularity tiers add `+1` above 10 views and a further
//! `+2` above 50. A document no term touched scores exactly 0, boosts included.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::fuzzy::{fuzzy_match_normalized, DEFAULT_FUZZY_THRESHOLD};
use crate::synonyms::ExpandedTerms;
use crate::types::Document;
use crate::utils::normalize;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

pub const TOPIC_WEIGHT: f64 = 10.0;
pub const TOPIC_CODE_WEIGHT: f64 = 8.0;
pub const NUMBER_WEIGHT: f64 = 7.0;
pub const TAGS_WEIGHT: f64 = 6.0;
pub const RESPONSE_TEXT_WEIGHT: f64 = 5.0;
pub const APPEAL_TEXT_WEIGHT: f64 = 4.0;
pub const ADDRESS_WEIGHT: f64 = 3.0;
pub const EXECUTOR_WEIGHT: f64 = 3.0;

/// Fuzzy topic hits count at this fraction of an exact topic hit.
pub const FUZZY_TOPIC_FACTOR: f64 = 0.5;

// =============================================================================
// WEIGHTED FIELDS
// =============================================================================

/// Reads one text field of a document.
pub type FieldAccessor = fn(&Document) -> &str;

/// A text field paired with the weight of a hit in it.
#[derive(Debug, Clone, Copy)]
pub struct WeightedField {
    pub name: &'static str,
    pub accessor: FieldAccessor,
    pub weight: f64,
}

/// Per-field hit weights. Tags are weighted separately because they match as a set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub topic: f64,
    pub topic_code: f64,
    pub number: f64,
    pub tags: f64,
    pub response_text: f64,
    pub appeal_text: f64,
    pub address: f64,
    pub executor: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            topic: TOPIC_WEIGHT,
            topic_code: TOPIC_CODE_WEIGHT,
            number: NUMBER_WEIGHT,
            tags: TAGS_WEIGHT,
            response_text: RESPONSE_TEXT_WEIGHT,
            appeal_text: APPEAL_TEXT_WEIGHT,
            address: ADDRESS_WEIGHT,
            executor: EXECUTOR_WEIGHT,
        }
    }
}

impl FieldWeights {
    /// The weighted text fields in evaluation order. Topic is always first.
    pub fn text_fields(&self) -> Vec<WeightedField> {
        vec![
            WeightedField {
                name: "topic",
                accessor: |d| d.topic.as_str(),
                weight: self.topic,
            },
            WeightedField {
                name: "topic_code",
                accessor: |d| d.topic_code.as_str(),
                weight: self.topic_code,
            },
            WeightedField {
                name: "number",
                accessor: |d| d.number.as_str(),
                weight: self.number,
            },
            WeightedField {
                name: "response_text",
                accessor: |d| d.response_text.as_str(),
                weight: self.response_text,
            },
            WeightedField {
                name: "appeal_text",
                accessor: |d| d.appeal_text.as_str(),
                weight: self.appeal_text,
            },
            WeightedField {
                name: "address",
                accessor: |d| d.address.as_str(),
                weight: self.address,
            },
            WeightedField {
                name: "executor",
                accessor: |d| d.executor.as_str(),
                weight: self.executor,
            },
        ]
    }

    /// Every weight, for validation.
    pub fn all(&self) -> [(&'static str, f64); 8] {
        [
            ("topic", self.topic),
            ("topic_code", self.topic_code),
            ("number", self.number),
            ("tags", self.tags),
            ("response_text", self.response_text),
            ("appeal_text", self.appeal_text),
            ("address", self.address),
            ("executor", self.executor),
        ]
    }
}

// =============================================================================
// POPULARITY
// =============================================================================

/// Adds `bonus` when a matched document has strictly more than `views_above` views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostTier {
    pub views_above: u64,
    pub bonus: f64,
}

/// Popularity tiers. Tiers stack: every tier the view count exceeds contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularityBoost {
    pub tiers: Vec<BoostTier>,
}

impl Default for PopularityBoost {
    fn default() -> Self {
        Self {
            tiers: vec![
                BoostTier {
                    views_above: 10,
                    bonus: 1.0,
                },
                BoostTier {
                    views_above: 50,
                    bonus: 2.0,
                },
            ],
        }
    }
}

impl PopularityBoost {
    /// Total bonus for a view count. 60 views → `1 + 2 = 3` with the defaults.
    pub fn bonus(&self, views: u64) -> f64 {
        self.tiers
            .iter()
            .filter(|tier| views > tier.views_above)
            .map(|tier| tier.bonus)
            .sum()
    }
}

// =============================================================================
// SCORER
// =============================================================================

/// Scores documents against an expanded term set.
#[derive(Debug, Clone)]
pub struct RelevanceScorer {
    fields: Vec<WeightedField>,
    tags_weight: f64,
    topic_weight: f64,
    fuzzy_threshold: f64,
    fuzzy_topic_factor: f64,
    popularity: PopularityBoost,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new(
            FieldWeights::default(),
            PopularityBoost::default(),
            DEFAULT_FUZZY_THRESHOLD,
            FUZZY_TOPIC_FACTOR,
        )
    }
}

impl RelevanceScorer {
    pub fn new(
        weights: FieldWeights,
        popularity: PopularityBoost,
        fuzzy_threshold: f64,
        fuzzy_topic_factor: f64,
    ) -> Self {
        Self {
            fields: weights.text_fields(),
            tags_weight: weights.tags,
            topic_weight: weights.topic,
            fuzzy_threshold,
            fuzzy_topic_factor,
            popularity,
        }
    }

    /// Relevance of `doc` for `terms`. Never negative; 0 means "no match".
    pub fn score(&self, doc: &Document, terms: &ExpandedTerms) -> f64 {
        let fields: Vec<(&'static str, String, f64)> = self
            .fields
            .iter()
            .map(|field| (field.name, normalize((field.accessor)(doc)), field.weight))
            .collect();
        let tags: Vec<String> = doc.tags.iter().map(|t| normalize(t)).collect();
        let topic = normalize(&doc.topic);

        let mut score = 0.0;
        let mut matched = false;

        for term in terms {
            for (name, text, weight) in &fields {
                if text.contains(term.as_str()) {
                    trace!(doc = %doc.id, field = *name, term = %term, "field hit");
                    score += weight;
                    matched = true;
                }
            }

            if tags.iter().any(|tag| tag.contains(term.as_str())) {
                score += self.tags_weight;
                matched = true;
            }

            let fuzzy = fuzzy_match_normalized(&topic, term, self.fuzzy_threshold);
            if fuzzy > 0.0 {
                score += self.topic_weight * fuzzy * self.fuzzy_topic_factor;
                matched = true;
            }
        }

        if !matched {
            return 0.0;
        }

        score + self.popularity.bonus(doc.views)
    }
}
