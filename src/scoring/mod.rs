// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A score is a sum of binary field hits, one per (term, field), weighted by how
//! much that field says about the ticket. The topic says the most, the executor
//! the least. Fuzzy topic hits add half strength on top, and popular tickets get
//! a small flat boost once they matched at all.

mod core;
pub mod ranking;

pub use core::*;
