//! Command implementations for Falx CLI.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::cli::args::{Command, FalxArgs, SearchArgs, StatsArgs, TokensArgs};
use crate::cli::output::{Hit, IndexStats, SearchResults, TermSetResult, output_result};
use crate::engine::RetrievalEngine;
use crate::error::Result;

/// Execute a CLI command.
pub fn execute_command(args: FalxArgs) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search(search_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
        Command::Tokens(tokens_args) => tokens(tokens_args.clone(), &args),
    }
}

/// Read each file as UTF-8 text, in argument order.
fn read_texts(files: &[std::path::PathBuf], cli_args: &FalxArgs) -> Result<Vec<String>> {
    let mut texts = Vec::with_capacity(files.len());
    for file in files {
        if cli_args.verbosity() > 1 {
            println!("Reading: {}", file.display());
        }
        texts.push(fs::read_to_string(file)?);
    }
    Ok(texts)
}

fn index_files(files: &[std::path::PathBuf], cli_args: &FalxArgs) -> Result<RetrievalEngine> {
    let texts = read_texts(files, cli_args)?;
    let mut engine = RetrievalEngine::new()?;
    engine.index_texts(texts)?;
    Ok(engine)
}

/// Index the given files and evaluate a Boolean query.
fn search(args: SearchArgs, cli_args: &FalxArgs) -> Result<()> {
    let engine = index_files(&args.files, cli_args)?;

    let start_time = Instant::now();
    let matches = engine.search(&args.query)?;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    let mut doc_ids: Vec<String> = matches.into_iter().collect();
    doc_ids.sort();

    let hits = doc_ids
        .into_iter()
        .map(|doc_id| {
            let text = if args.show_text {
                engine.document(&doc_id).map(|t| t.to_string())
            } else {
                None
            };
            Hit { doc_id, text }
        })
        .collect::<Vec<_>>();

    let results = SearchResults {
        query: args.query.clone(),
        total_hits: hits.len(),
        hits,
        duration_ms,
    };

    output_result(
        &format!("Results for query: '{}'", args.query),
        &results,
        cli_args,
    )
}

/// Index the given files and report index statistics.
fn stats(args: StatsArgs, cli_args: &FalxArgs) -> Result<()> {
    let engine = index_files(&args.files, cli_args)?;
    let index = engine.index();

    let mut by_doc_freq: Vec<(String, usize)> = index
        .terms()
        .map(|term| (term.to_string(), index.postings(term).len()))
        .collect();
    by_doc_freq.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    by_doc_freq.truncate(args.top);

    let stats = IndexStats {
        total_documents: index.doc_count(),
        distinct_terms: index.term_count(),
        top_terms: by_doc_freq,
    };

    output_result("Index statistics", &stats, cli_args)
}

/// Dump the analyzer's term set for one file.
fn tokens(args: TokensArgs, cli_args: &FalxArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)?;
    let analyzer = StandardAnalyzer::new()?;

    let mut terms: Vec<String> = analyzer.term_set(&text)?.into_iter().collect();
    terms.sort();

    let result = TermSetResult {
        file: display_path(&args.file),
        term_count: terms.len(),
        terms,
    };

    output_result("Term set", &result, cli_args)
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
