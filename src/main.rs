// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use giskb::{
    load_knowledge_base, ConfigError, Document, EngineConfig, KnowledgeBaseStats, MemoryStore,
    SearchEngine, SearchFilters, StoreError, SynonymTable,
};

mod cli;
use cli::display::{
    pad_left, pad_right, row, score_value, section_bot, section_mid, section_top, status_label,
    themed, title, truncate, BOLD, DIM, GRAY, YELLOW,
};
use cli::{Cli, Commands};

/// Env var holding the log filter, e.g. `GISKB_LOG=giskb=trace`.
const LOG_ENV: &str = "GISKB_LOG";

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("giskb=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    let synonyms = match &cli.synonyms {
        Some(path) => SynonymTable::from_path(path)?,
        None => SynonymTable::housing(),
    };
    let engine = SearchEngine::with_config(&synonyms, config);

    match cli.command {
        Commands::Search {
            file,
            query,
            filters,
            limit,
            json,
        } => run_search(&engine, &file, query.as_deref(), filters.into(), limit, json),
        Commands::Similar {
            file,
            id,
            limit,
            json,
        } => run_similar(&engine, &file, &id, limit, json),
        Commands::Suggest { file, prefix } => {
            let store = MemoryStore::open(&file)?;
            for topic in engine.suggest(&store.snapshot(), &prefix) {
                println!("{}", topic);
            }
            Ok(())
        }
        Commands::Expand { query } => {
            for term in engine.synonyms().expand(&query) {
                println!("{}", term);
            }
            Ok(())
        }
        Commands::Stats { file, json } => run_stats(&file, json),
        Commands::Categories { file } => {
            let mut kb = load_knowledge_base(&file)?;
            kb.refresh_categories();
            println!("{}", serde_json::to_string_pretty(&kb.categories)?);
            Ok(())
        }
    }
}

fn run_search(
    engine: &SearchEngine<'_>,
    file: &Path,
    query: Option<&str>,
    filters: SearchFilters,
    limit: usize,
    json: bool,
) -> Result<(), CliError> {
    let store = MemoryStore::open(file)?;
    let documents = store.snapshot();
    let mut hits = engine.search(&documents, query, &filters);
    let total = hits.len();
    hits.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    title(&search_heading(query));
    section_top(&format!("{} of {} results", hits.len(), total));
    if hits.is_empty() {
        row(&themed(GRAY, &[DIM], "  nothing found"));
    }
    for hit in &hits {
        let score = hit.relevance.map_or_else(|| pad_left("", 6), score_value);
        document_row(&score, hit.document);
    }
    section_bot();
    Ok(())
}

fn run_similar(
    engine: &SearchEngine<'_>,
    file: &Path,
    id: &str,
    limit: Option<usize>,
    json: bool,
) -> Result<(), CliError> {
    let store = MemoryStore::open(file)?;
    let source = store.require(id)?;
    let documents = store.snapshot();
    let limit = limit.unwrap_or(engine.config().similar_limit);
    let similar = engine.find_similar(&source, &documents, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&similar)?);
        return Ok(());
    }

    title(&format!("related to #{}", source.id));
    section_top("Source");
    document_row(&pad_left("", 6), &source);
    section_mid(&format!("{} related", similar.len()));
    for item in &similar {
        document_row(&score_value(item.similarity), item.document);
    }
    section_bot();
    Ok(())
}

fn run_stats(file: &Path, json: bool) -> Result<(), CliError> {
    let store = MemoryStore::open(file)?;
    let (documents, categories) = store.snapshot_with_categories();
    let stats = KnowledgeBaseStats::build(&documents, &categories);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    title("Knowledge base");
    section_top("Totals");
    row(&format!("  articles    {}", themed(YELLOW, &[BOLD], &stats.total_articles.to_string())));
    row(&format!("  categories  {}", themed(YELLOW, &[BOLD], &stats.total_categories.to_string())));
    row(&format!("  views       {}", themed(YELLOW, &[BOLD], &stats.total_views.to_string())));
    section_mid("Most viewed");
    for doc in &stats.top_viewed {
        document_row(&pad_left(&doc.views.to_string(), 6), doc);
    }
    section_mid("Executors");
    for executor in &stats.executors {
        row(&format!("  {}", truncate(executor, 76)));
    }
    section_mid("Houses");
    row(&format!("  {}", truncate(&stats.addresses.join(", "), 76)));
    section_bot();
    Ok(())
}

/// `score  #id  topic  status` in one boxed line.
/// Report title for a search.
fn search_heading(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("giskb · \"{}\"", q),
        None => "giskb · all tickets".to_string(),
    }
}

fn document_row(score: &str, doc: &Document) {
    let id = themed(GRAY, &[], &format!("#{}", doc.id));
    row(&format!(
        " {} {} {} {}",
        score,
        pad_right(&id, 7),
        pad_right(&truncate(&doc.topic, 48), 48),
        status_label(&truncate(&doc.status, 14)),
    ));
}
