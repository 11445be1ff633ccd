// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured filters: conjunctive predicates applied before scoring.
//!
//! Only filters with a non-empty value become predicates. An absent filter is
//! skipped outright, it is never an always-true predicate.

use crate::types::{active, Document, SearchFilters};
use crate::utils::normalize;

/// One active filter, ready to test documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Normalized substring of the address.
    Address(String),
    /// Normalized substring of the executor.
    Executor(String),
    /// `date >= value`, plain string comparison. Undated documents fail.
    DateFrom(String),
    /// `date <= value`, plain string comparison. Undated documents fail.
    DateTo(String),
    /// Exact status.
    Status(String),
    /// Exact tag.
    Category(String),
}

impl Filter {
    /// Check if a document passes this filter
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::Address(needle) => normalize(&doc.address).contains(needle.as_str()),
            Filter::Executor(needle) => normalize(&doc.executor).contains(needle.as_str()),
            Filter::DateFrom(from) => {
                !doc.date.is_empty() && doc.date.as_str() >= from.as_str()
            }
            Filter::DateTo(to) => !doc.date.is_empty() && doc.date.as_str() <= to.as_str(),
            Filter::Status(status) => doc.status == *status,
            Filter::Category(category) => doc.has_tag(category),
        }
    }
}

/// Active filters in evaluation order: address, executor, dateFrom, dateTo,
/// status, category.
pub fn active_filters(filters: &SearchFilters) -> Vec<Filter> {
    let mut out = Vec::new();

    if let Some(address) = active(&filters.address) {
        out.push(Filter::Address(normalize(address)));
    }
    if let Some(executor) = active(&filters.executor) {
        out.push(Filter::Executor(normalize(executor)));
    }
    if let Some(from) = active(&filters.date_from) {
        out.push(Filter::DateFrom(from.to_string()));
    }
    if let Some(to) = active(&filters.date_to) {
        out.push(Filter::DateTo(to.to_string()));
    }
    if let Some(status) = active(&filters.status) {
        out.push(Filter::Status(status.to_string()));
    }
    if let Some(category) = active(&filters.category) {
        out.push(Filter::Category(category.to_string()));
    }

    out
}

/// Documents passing every active filter, each with its position in `documents`.
pub fn apply_filters<'a>(
    documents: &'a [Document],
    filters: &[Filter],
) -> Vec<(usize, &'a Document)> {
    documents
        .iter()
        .enumerate()
        .filter(|(_, doc)| filters.iter().all(|f| f.matches(doc)))
        .collect()
}
