//! Command line argument parsing for Falx CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Falx - Boolean full-text retrieval over plain text files
#[derive(Parser, Debug, Clone)]
#[command(name = "falx")]
#[command(about = "Boolean full-text retrieval over plain text files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Falx Contributors")]
#[command(long_about = None)]
pub struct FalxArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FalxArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Index text files and evaluate a Boolean query against them
    Search(SearchArgs),

    /// Index text files and show index statistics
    Stats(StatsArgs),

    /// Dump the analyzer's term set for one file
    Tokens(TokensArgs),
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Text files to index (identifiers doc1, doc2, … by argument order)
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Boolean query (supports a single AND, OR, or NOT)
    #[arg(short = 'Q', long, value_name = "QUERY")]
    pub query: String,

    /// Echo each matching document's text alongside its identifier
    #[arg(long)]
    pub show_text: bool,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Text files to index
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Number of highest-document-frequency terms to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for dumping a file's term set
#[derive(Parser, Debug, Clone)]
pub struct TokensArgs {
    /// Text file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Output format for CLI results
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_args() {
        let args =
            FalxArgs::try_parse_from(["falx", "search", "a.txt", "b.txt", "--query", "cat and dog"])
                .unwrap();

        match args.command {
            Command::Search(search) => {
                assert_eq!(search.files.len(), 2);
                assert_eq!(search.query, "cat and dog");
                assert!(!search.show_text);
            }
            _ => panic!("Expected search command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        let args =
            FalxArgs::try_parse_from(["falx", "--format", "json", "tokens", "a.txt"]).unwrap();

        assert!(matches!(args.output_format, OutputFormat::Json));
    }

    #[test]
    fn test_verbosity() {
        let args = FalxArgs::try_parse_from(["falx", "tokens", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = FalxArgs::try_parse_from(["falx", "-q", "tokens", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);

        let args = FalxArgs::try_parse_from(["falx", "-vv", "tokens", "a.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);
    }

    #[test]
    fn test_search_requires_files() {
        assert!(FalxArgs::try_parse_from(["falx", "search", "--query", "cat"]).is_err());
    }
}
