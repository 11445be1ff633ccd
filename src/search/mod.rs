// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: filters, synonym expansion, scoring and ordering over a document slice.
//!
//! There is no index. Every call walks the live collection, so the result always
//! reflects the store as it is now. Cost is `O(documents × terms × field length)`.
//!
//! ```text
//! query ──▶ SynonymTable::expand ──┐
//!                                  ▼
//! documents ──▶ filters ──▶ RelevanceScorer ──▶ rank ──▶ hits
//! ```

pub mod filter;
mod similar;
mod suggest;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::EngineConfig;
use crate::scoring::ranking::{rank, Ranked};
use crate::scoring::RelevanceScorer;
use crate::synonyms::SynonymTable;
use crate::types::{Document, SearchFilters, SearchHit};

pub use filter::{active_filters, apply_filters, Filter};
pub use similar::find_similar;

/// The search entry point. Borrows an immutable synonym table; holds no
/// per-collection state, so one engine serves any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct SearchEngine<'t> {
    synonyms: &'t SynonymTable,
    scorer: RelevanceScorer,
    config: EngineConfig,
}

impl<'t> SearchEngine<'t> {
    /// Engine with the default tuning.
    pub fn new(synonyms: &'t SynonymTable) -> Self {
        Self::with_config(synonyms, EngineConfig::default())
    }

    pub fn with_config(synonyms: &'t SynonymTable, config: EngineConfig) -> Self {
        Self {
            synonyms,
            scorer: config.scorer(),
            config,
        }
    }

    pub fn synonyms(&self) -> &'t SynonymTable {
        self.synonyms
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Filter, score and order `documents`.
    ///
    /// - No query and no active filter: every document, in input order, unscored.
    /// - Filters only: the survivors in input order, unscored.
    /// - Query: survivors with relevance > 0, by descending relevance; equal
    ///   relevance keeps input order.
    ///
    /// A query that normalizes to nothing ("", "  ", "!!!") counts as no query.
    pub fn search<'a>(
        &self,
        documents: &'a [Document],
        query: Option<&str>,
        filters: &SearchFilters,
    ) -> Vec<SearchHit<'a>> {
        let terms = query
            .map(|q| self.synonyms.expand(q))
            .filter(|terms| !terms.is_empty());

        if terms.is_none() && filters.is_empty() {
            return documents.iter().map(SearchHit::unscored).collect();
        }

        let active = active_filters(filters);
        let candidates = apply_filters(documents, &active);
        debug!(
            filters = active.len(),
            candidates = candidates.len(),
            total = documents.len(),
            "filters applied"
        );

        let Some(terms) = terms else {
            return candidates
                .into_iter()
                .map(|(_, doc)| SearchHit::unscored(doc))
                .collect();
        };

        let score = |&(position, doc): &(usize, &'a Document)| Ranked {
            position,
            score: self.scorer.score(doc, &terms),
            item: doc,
        };

        #[cfg(feature = "parallel")]
        let scored: Vec<Ranked<&Document>> = candidates.par_iter().map(score).collect();
        #[cfg(not(feature = "parallel"))]
        let scored: Vec<Ranked<&Document>> = candidates.iter().map(score).collect();

        let hits: Vec<SearchHit<'a>> = rank(scored)
            .into_iter()
            .map(|r| SearchHit::scored(r.item, r.score))
            .collect();
        debug!(terms = terms.len(), hits = hits.len(), "query scored");

        hits
    }
}
