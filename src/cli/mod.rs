// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the giskb command-line interface.
//!
//! Every data subcommand reads a knowledge-base JSON file
//! (`{"articles": [...], "categories": [...]}`), runs one core operation over
//! it and prints the result, either as a boxed terminal report or, with
//! `--json`, as the JSON a web client would receive.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use giskb::SearchFilters;

#[derive(Parser)]
#[command(
    name = "giskb",
    about = "Synonym-aware fuzzy search over a housing-services knowledge base",
    version
)]
pub struct Cli {
    /// Engine configuration JSON (weights, thresholds, limits)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Thesaurus JSON replacing the built-in housing synonyms
    #[arg(long, global = true)]
    pub synonyms: Option<PathBuf>,

    /// Log debug events to stderr (overrides GISKB_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search articles by free text and structured filters
    Search {
        /// Knowledge-base JSON file
        file: PathBuf,

        /// Free-text query; omit to list by filters only
        query: Option<String>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// List articles related to one article
    Similar {
        /// Knowledge-base JSON file
        file: PathBuf,

        /// Id of the source article
        id: String,

        /// Maximum number of related articles (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Suggest article topics for a partial query
    Suggest {
        /// Knowledge-base JSON file
        file: PathBuf,

        /// What the user has typed so far
        prefix: String,
    },

    /// Show the synonym expansion of a query
    Expand {
        /// Query to expand
        query: String,
    },

    /// Knowledge-base statistics
    Stats {
        /// Knowledge-base JSON file
        file: PathBuf,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// Tag categories with counts, recomputed from the articles
    Categories {
        /// Knowledge-base JSON file
        file: PathBuf,
    },
}

/// Structured filters shared by `search`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Address substring (case and punctuation insensitive)
    #[arg(long)]
    pub address: Option<String>,

    /// Executor substring (case and punctuation insensitive)
    #[arg(long)]
    pub executor: Option<String>,

    /// Earliest date, inclusive (ISO 8601)
    #[arg(long)]
    pub date_from: Option<String>,

    /// Latest date, inclusive (ISO 8601)
    #[arg(long)]
    pub date_to: Option<String>,

    /// Exact status
    #[arg(long)]
    pub status: Option<String>,

    /// Exact tag
    #[arg(long)]
    pub category: Option<String>,
}

impl From<FilterArgs> for SearchFilters {
    fn from(args: FilterArgs) -> Self {
        SearchFilters {
            address: args.address,
            executor: args.executor,
            date_from: args.date_from,
            date_to: args.date_to,
            status: args.status,
            category: args.category,
        }
    }
}
