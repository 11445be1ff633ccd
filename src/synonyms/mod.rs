// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Domain thesaurus: query words broadened to every surface form of their concept.
//!
//! Residents write "ИПУ", operators write "прибор учёта", the answer says "счетчик".
//! A [`SynonymTable`] groups such variants under one concept key and keeps a reverse
//! index from every normalized variant back to its concept, so expansion is one
//! hash lookup per query word.
//!
//! The table is an ordinary immutable value. Build it once at startup
//! ([`SynonymTable::housing`] for the built-in thesaurus, [`SynonymTable::from_json`]
//! for an injected one) and hand references to whoever searches.

mod housing;
mod table;

pub use housing::HOUSING_SYNONYMS;
pub use table::*;
