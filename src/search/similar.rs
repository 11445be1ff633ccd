// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "Related articles": document-to-document affinity.
//!
//! `similarity = 2 × |shared tags| + fuzzy(other.topic, source.topic)`
//!
//! One shared tag (2.0) always outweighs a perfect topic match (at most 1.0), so
//! tags decide the order and the topic only breaks ties within a tag count. An
//! untagged source has no related documents at all.

use std::collections::HashSet;

use crate::fuzzy::fuzzy_match_normalized;
use crate::scoring::ranking::{rank, Ranked};
use crate::types::{Document, SimilarDocument};
use crate::utils::normalize;

use super::SearchEngine;

/// Weight of one shared tag.
pub const SHARED_TAG_WEIGHT: f64 = 2.0;

impl SearchEngine<'_> {
    /// Up to `limit` documents related to `source`, most similar first.
    pub fn find_similar<'a>(
        &self,
        source: &Document,
        documents: &'a [Document],
        limit: usize,
    ) -> Vec<SimilarDocument<'a>> {
        find_similar(source, documents, limit, self.config().fuzzy_threshold)
    }
}

/// Documents related to `source` by shared tags and topic closeness.
///
/// `source` itself (matched by id) is excluded. Tags compare exactly and as
/// sets, so a tag repeated on either side counts once.
pub fn find_similar<'a>(
    source: &Document,
    documents: &'a [Document],
    limit: usize,
    fuzzy_threshold: f64,
) -> Vec<SimilarDocument<'a>> {
    if source.tags.is_empty() {
        return Vec::new();
    }

    let source_tags: HashSet<&str> = source.tags.iter().map(String::as_str).collect();
    let source_topic = normalize(&source.topic);

    let candidates = documents
        .iter()
        .enumerate()
        .filter(|(_, other)| other.id != source.id)
        .map(|(position, other)| {
            let other_tags: HashSet<&str> = other.tags.iter().map(String::as_str).collect();
            let shared = other_tags.intersection(&source_tags).count();
            let topic =
                fuzzy_match_normalized(&normalize(&other.topic), &source_topic, fuzzy_threshold);
            Ranked {
                position,
                score: SHARED_TAG_WEIGHT * shared as f64 + topic,
                item: other,
            }
        })
        .collect();

    rank(candidates)
        .into_iter()
        .take(limit)
        .map(|r| SimilarDocument {
            document: r.item,
            similarity: r.score,
        })
        .collect()
}
