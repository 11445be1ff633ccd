// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks: tickets, filters, and the transient result wrappers.
//!
//! A [`Document`] is owned by whatever store loaded it. The search core only ever
//! borrows documents; scores live in [`SearchHit`] and [`SimilarDocument`], never
//! on the document itself.
//!
//! # Invariants
//!
//! - **Document**: every text field reads as `""` when the source JSON omits it or
//!   stores `null`. `tags` may contain duplicates; matching treats them as a set.
//! - **SearchHit / SimilarDocument**: serialize as the flattened document plus one
//!   extra numeric field (`relevance` or `similarity`).

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// DOCUMENT
// =============================================================================

/// One knowledge-base article: a support ticket together with its answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub topic: String,
    #[serde(default, deserialize_with = "nullable")]
    pub topic_code: String,
    #[serde(default, deserialize_with = "nullable")]
    pub number: String,
    #[serde(default, deserialize_with = "nullable")]
    pub address: String,
    #[serde(default, deserialize_with = "nullable")]
    pub executor: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub appeal_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub response_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    /// ISO 8601 date; range filters compare it as a plain string.
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Document {
    /// Does this document carry `tag` verbatim?
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// `null` reads as the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ids are opaque strings, but older exports store them as numbers.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

// =============================================================================
// FILTERS
// =============================================================================

/// Optional structured filters applied before relevance scoring.
///
/// An empty string means the same as `None`: the filter is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub address: Option<String>,
    pub executor: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn with_executor(mut self, value: impl Into<String>) -> Self {
        self.executor = Some(value.into());
        self
    }

    pub fn with_date_from(mut self, value: impl Into<String>) -> Self {
        self.date_from = Some(value.into());
        self
    }

    pub fn with_date_to(mut self, value: impl Into<String>) -> Self {
        self.date_to = Some(value.into());
        self
    }

    pub fn with_status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    pub fn with_category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// True when no filter has a non-empty value.
    pub fn is_empty(&self) -> bool {
        [
            &self.address,
            &self.executor,
            &self.date_from,
            &self.date_to,
            &self.status,
            &self.category,
        ]
        .iter()
        .all(|value| active(value).is_none())
    }
}

/// The filter value if it is present and non-empty.
pub(crate) fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// =============================================================================
// RESULTS
// =============================================================================

/// A document returned by a search, with its relevance when a query was scored.
///
/// `relevance` is `None` for pass-through and filter-only searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

impl<'a> SearchHit<'a> {
    pub fn unscored(document: &'a Document) -> Self {
        Self {
            document,
            relevance: None,
        }
    }

    pub fn scored(document: &'a Document, relevance: f64) -> Self {
        Self {
            document,
            relevance: Some(relevance),
        }
    }
}

/// A related document with its affinity to the source document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarDocument<'a> {
    #[serde(flatten)]
    pub document: &'a Document,
    pub similarity: f64,
}

/// A tag and how many times it occurs across all documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub count: usize,
}
