// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Synonym-aware fuzzy search over a housing-services knowledge base.
//!
//! Tickets ("обращения") are written by residents in free Russian text, full of
//! typos, `ё`/`е` variation and colloquial names for the same thing. This crate
//! ranks them anyway: every query is expanded through a housing thesaurus, then
//! matched against weighted fields with an edit-distance fallback on the topic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│  synonyms/   │────▶│   search/    │
//! │ (normalize) │     │ (expand)     │     │ (SearchEngine│
//! └─────────────┘     └──────────────┘     │  filters,    │
//!        │                                 │  similar,    │
//!        ▼                                 │  suggest)    │
//! ┌─────────────┐     ┌──────────────┐     └──────────────┘
//! │   fuzzy/    │────▶│   scoring/   │────────────▲
//! │(levenshtein)│     │ (relevance,  │
//! └─────────────┘     │  ranking)    │
//!                     └──────────────┘
//! ```
//!
//! Around the core: [`store`] (the document-store boundary), [`stats`]
//! (categories and totals), [`config`] (tuning) and [`error`].
//!
//! # Usage
//!
//! ```
//! use giskb::{SearchEngine, SearchFilters, SynonymTable};
//! use giskb::testing::make_doc;
//!
//! let table = SynonymTable::housing();
//! let engine = SearchEngine::new(&table);
//! let docs = vec![make_doc("1", "Протечка крыши"), make_doc("2", "Не работает лифт")];
//!
//! let hits = engine.search(&docs, Some("кровля"), &SearchFilters::new());
//! assert_eq!(hits[0].document.id, "1");
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod scoring;
pub mod search;
pub mod stats;
pub mod store;
pub mod synonyms;
pub mod testing;
mod types;
pub mod utils;

pub use config::EngineConfig;
pub use error::{ConfigError, StoreError};
pub use fuzzy::{fuzzy_match, levenshtein_distance, DEFAULT_FUZZY_THRESHOLD};
pub use scoring::{FieldWeights, PopularityBoost, RelevanceScorer};
pub use search::{find_similar, SearchEngine};
pub use stats::{derive_categories, KnowledgeBaseStats, StatsSummary};
pub use store::{load_knowledge_base, DocumentStore, KnowledgeBase, MemoryStore};
pub use synonyms::{ExpandedTerms, SynonymTable};
pub use types::{Category, Document, SearchFilters, SearchHit, SimilarDocument};
pub use utils::normalize;
