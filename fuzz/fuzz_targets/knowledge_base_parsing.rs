// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knowledge-base parsing under adversarial input.
//!
//! An imported JSON file is user-controlled. The worst case must be an error,
//! never a panic, and anything that parses must be searchable.

#![no_main]

use giskb::stats::TOP_VIEWED_LIMIT;
use giskb::{
    derive_categories, KnowledgeBase, KnowledgeBaseStats, SearchEngine, SearchFilters, SynonymTable,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(kb) = KnowledgeBase::from_reader(data) else {
        return;
    };

    let table = SynonymTable::housing();
    let engine = SearchEngine::new(&table);

    // INVARIANT 1: a parsed collection passes through untouched
    let hits = engine.search(&kb.articles, None, &SearchFilters::new());
    assert_eq!(hits.len(), kb.articles.len());

    // INVARIANT 2: statistics agree with the collection
    let stats = KnowledgeBaseStats::build(&kb.articles, &kb.categories);
    assert_eq!(stats.total_articles, kb.articles.len());
    assert!(stats.top_viewed.len() <= TOP_VIEWED_LIMIT);

    // INVARIANT 3: derived category counts add up to the tag count
    let total: usize = derive_categories(&kb.articles).iter().map(|c| c.count).sum();
    assert_eq!(total, kb.articles.iter().map(|a| a.tags.len()).sum::<usize>());

    if let Some(first) = kb.articles.first() {
        let similar = engine.find_similar(first, &kb.articles, 5);
        assert!(similar.len() <= 5);
    }
});
