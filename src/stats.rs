// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knowledge-base statistics and tag categories.
//!
//! Everything here is derived on demand from a document slice; nothing is cached.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::types::{Category, Document};

/// How many documents `top_viewed` lists.
pub const TOP_VIEWED_LIMIT: usize = 5;

/// Count every tag occurrence. Categories come out in first-seen order with
/// ids `"1"`, `"2"`, ... in that order.
pub fn derive_categories(documents: &[Document]) -> Vec<Category> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for tag in documents.iter().flat_map(|d| d.tags.iter().map(String::as_str)) {
        match slots.get(tag) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(tag, counts.len());
                counts.push((tag, 1));
            }
        }
    }
    counts
        .into_iter()
        .enumerate()
        .map(|(i, (name, count))| Category {
            id: (i + 1).to_string(),
            name: name.to_string(),
            count,
        })
        .collect()
}

/// Full statistics over a knowledge base.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseStats<'a> {
    pub total_articles: usize,
    pub total_categories: usize,
    pub total_views: u64,
    /// Most viewed first; equal views keep store order.
    pub top_viewed: Vec<&'a Document>,
    /// Distinct non-empty executors, first-seen order.
    pub executors: Vec<&'a str>,
    /// Distinct `д. <number>` fragments of addresses, first-seen order.
    pub addresses: Vec<&'a str>,
}

/// The three totals, without the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_articles: usize,
    pub total_categories: usize,
    pub total_views: u64,
}

impl<'a> KnowledgeBaseStats<'a> {
    /// `categories` is the store's category list; only its length is used.
    pub fn build(documents: &'a [Document], categories: &[Category]) -> Self {
        let total_views = documents.iter().map(|d| d.views).sum();

        let mut top_viewed: Vec<&Document> = documents.iter().collect();
        // sort_by is stable
        top_viewed.sort_by(|a, b| b.views.cmp(&a.views));
        top_viewed.truncate(TOP_VIEWED_LIMIT);

        let executors = distinct(
            documents
                .iter()
                .map(|d| d.executor.as_str())
                .filter(|e| !e.is_empty()),
        );
        let addresses = distinct(documents.iter().filter_map(|d| house_number(&d.address)));

        Self {
            total_articles: documents.len(),
            total_categories: categories.len(),
            total_views,
            top_viewed,
            executors,
            addresses,
        }
    }

    pub fn summary(&self) -> StatsSummary {
        StatsSummary {
            total_articles: self.total_articles,
            total_categories: self.total_categories,
            total_views: self.total_views,
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}

/// `д.`, optional whitespace, then ASCII digits.
static HOUSE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"д\.\s*[0-9]+").expect("house number pattern is valid"));

/// First house-number fragment of an address, e.g. `"д. 15"` in
/// `"ул. Ленина, д. 15, кв. 3"`.
pub fn house_number(address: &str) -> Option<&str> {
    HOUSE_NUMBER.find(address).map(|m| m.as_str())
}
