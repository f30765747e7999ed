//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{FalxArgs, OutputFormat};
use crate::error::Result;

/// A single search hit.
#[derive(Debug, Serialize, Deserialize)]
pub struct Hit {
    pub doc_id: String,
    /// Document text, present when `--show-text` was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub hits: Vec<Hit>,
    pub total_hits: usize,
    pub duration_ms: u64,
}

/// Index statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct IndexStats {
    pub total_documents: usize,
    pub distinct_terms: usize,
    /// Terms with the largest posting sets, as (term, document frequency).
    pub top_terms: Vec<(String, usize)>,
}

/// Result structure for the tokens command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TermSetResult {
    pub file: String,
    pub terms: Vec<String>,
    pub term_count: usize,
}

/// Output a result in the configured format.
pub fn output_result<T: Serialize + HumanDisplay>(
    message: &str,
    result: &T,
    args: &FalxArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
            Ok(())
        }
    }
}

/// Human-readable rendering for CLI result types.
pub trait HumanDisplay {
    fn print_human(&self, args: &FalxArgs);
}

impl HumanDisplay for SearchResults {
    fn print_human(&self, args: &FalxArgs) {
        if self.hits.is_empty() {
            println!("No documents found matching the query.");
        } else {
            for hit in &self.hits {
                match &hit.text {
                    Some(text) => println!("{}: {text}", hit.doc_id),
                    None => println!("{}", hit.doc_id),
                }
            }
        }
        if args.verbosity() > 1 {
            println!();
            println!("{} hit(s) in {} ms", self.total_hits, self.duration_ms);
        }
    }
}

impl HumanDisplay for IndexStats {
    fn print_human(&self, _args: &FalxArgs) {
        println!("Documents:      {}", self.total_documents);
        println!("Distinct terms: {}", self.distinct_terms);
        if !self.top_terms.is_empty() {
            println!("Top terms:");
            for (term, doc_freq) in &self.top_terms {
                println!("  {term}: {doc_freq}");
            }
        }
    }
}

impl HumanDisplay for TermSetResult {
    fn print_human(&self, _args: &FalxArgs) {
        for term in &self.terms {
            println!("{term}");
        }
    }
}
