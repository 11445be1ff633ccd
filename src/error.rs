// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fallible edges of the crate.
//!
//! Searching never fails: no match is an empty result or a zero score. Only
//! loading things from disk and looking documents up by id can go wrong.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Loading or querying the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid knowledge base JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document {0} not found")]
    NotFound(String),
}

/// Loading engine configuration or a synonym thesaurus.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
