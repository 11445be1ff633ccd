// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary queries and filters at a synthetic ticket collection and
//! checks the ordering contract of the results. Emoji, RTL text and null bytes
//! are all fair game.

#![no_main]

use arbitrary::Arbitrary;
use giskb::testing::sample_corpus;
use giskb::{Document, SearchEngine, SearchFilters, SynonymTable};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: Option<String>,
    status: Option<String>,
    category: Option<String>,
    address: Option<String>,
    date_from: Option<String>,
}

fuzz_target!(|input: QueryInput| {
    static TABLE: OnceLock<SynonymTable> = OnceLock::new();
    static DOCS: OnceLock<Vec<Document>> = OnceLock::new();
    let table = TABLE.get_or_init(SynonymTable::housing);
    let docs = DOCS.get_or_init(|| sample_corpus(150));
    let engine = SearchEngine::new(table);

    // Cap query length to avoid timeout
    let query: Option<String> = input.query.map(|q| q.chars().take(200).collect());
    let filters = SearchFilters {
        status: input.status,
        category: input.category,
        address: input.address,
        date_from: input.date_from,
        ..SearchFilters::default()
    };

    let hits = engine.search(docs, query.as_deref(), &filters);

    // INVARIANT 1: never more hits than documents
    assert!(hits.len() <= docs.len());

    // INVARIANT 2: scored results are positive and non-increasing
    for pair in hits.windows(2) {
        assert!(pair[0].relevance >= pair[1].relevance);
    }
    for hit in &hits {
        if let Some(relevance) = hit.relevance {
            assert!(relevance > 0.0);
        }
    }

    // INVARIANT 3: every hit passes the status filter
    if let Some(status) = filters.status.as_deref().filter(|s| !s.is_empty()) {
        assert!(hits.iter().all(|h| h.document.status == status));
    }

    // INVARIANT 4: suggestions never panic and stay within the limit
    if let Some(q) = query.as_deref() {
        assert!(engine.suggest(docs, q).len() <= engine.config().suggestion_limit);
    }
});
