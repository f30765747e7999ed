//! Boolean query evaluation over an inverted index.
//!
//! Evaluation is best effort and never fails a lookup: unknown terms and
//! segments resolve to empty posting sets, and malformed NOT queries fall
//! back to the full key universe instead of signaling an error.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::standard::StandardAnalyzer;
//! use falx::index::inverted::IndexBuilder;
//! use falx::query::evaluator::QueryEvaluator;
//! use std::sync::Arc;
//!
//! let analyzer = Arc::new(StandardAnalyzer::new().unwrap());
//! let index = IndexBuilder::new(analyzer.clone())
//!     .build(vec![
//!         ("doc1".to_string(), "The cat sat on the mat".to_string()),
//!         ("doc2".to_string(), "The dog sat on the log".to_string()),
//!     ])
//!     .unwrap();
//!
//! let evaluator = QueryEvaluator::new(analyzer);
//! let hits = evaluator.evaluate(&index, "cat AND sat").unwrap();
//!
//! assert_eq!(hits.len(), 1);
//! assert!(hits.contains("doc1"));
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::index::inverted::{InvertedIndex, PostingSet};
use crate::query::operator::{Operator, detect_operator, split_on_operator};

/// Evaluates single-operator Boolean queries against an inverted index.
///
/// The evaluator holds an analyzer for operator detection only; query
/// segments themselves are looked up verbatim (after trimming) as index
/// keys and are never re-tokenized, so a segment containing several words
/// or punctuation will typically miss.
#[derive(Clone)]
pub struct QueryEvaluator {
    analyzer: Arc<dyn Analyzer>,
}

impl QueryEvaluator {
    /// Create a new query evaluator with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        QueryEvaluator { analyzer }
    }

    /// Get the analyzer used for operator detection.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Evaluate a raw query string against the index and return the set
    /// of matching document identifiers.
    ///
    /// The query is case-folded, word-tokenized for operator detection,
    /// and then dispatched:
    ///
    /// - **AND**: intersect the posting sets of the `" and "`-separated
    ///   segments, seeded with the first segment's postings.
    /// - **OR**: union the posting sets of the `" or "`-separated
    ///   segments, starting from the empty set.
    /// - **NOT**: with exactly two `" not "`-separated segments, return
    ///   the set of index keys minus the second segment's postings;
    ///   otherwise return the whole key universe. The universe here is
    ///   the set of distinct TERMS, not document identifiers — retained
    ///   behavior from the original system (see DESIGN.md).
    /// - **no operator**: union the posting sets of every query token.
    ///
    /// Malformed queries degrade to best-effort interpretations; no error
    /// conditions arise from evaluation itself.
    pub fn evaluate(&self, index: &InvertedIndex, raw_query: &str) -> Result<PostingSet> {
        let query = raw_query.to_lowercase();
        let tokens: Vec<String> = self
            .analyzer
            .analyze(&query)?
            .map(|token| token.text)
            .collect();

        let result = match detect_operator(&tokens) {
            Some(Operator::And) => self.evaluate_and(index, &query),
            Some(Operator::Or) => self.evaluate_or(index, &query),
            Some(Operator::Not) => self.evaluate_not(index, &query),
            None => self.evaluate_terms(index, &tokens),
        };

        Ok(result)
    }

    /// Intersect the postings of all `" and "` segments.
    fn evaluate_and(&self, index: &InvertedIndex, query: &str) -> PostingSet {
        let segments = split_on_operator(query, Operator::And);

        // split_on_operator always yields at least one segment
        let mut result = index.postings(&segments[0]).clone();
        for segment in &segments[1..] {
            let postings = index.postings(segment);
            result.retain(|doc_id| postings.contains(doc_id));
        }
        result
    }

    /// Union the postings of all `" or "` segments.
    fn evaluate_or(&self, index: &InvertedIndex, query: &str) -> PostingSet {
        let segments = split_on_operator(query, Operator::Or);

        let mut result = PostingSet::new();
        for segment in &segments {
            result.extend(index.postings(segment).iter().cloned());
        }
        result
    }

    /// Subtract the excluded segment's postings from the key universe.
    ///
    /// Only the exact two-segment case excludes anything; any other
    /// segment count silently returns the full universe of index keys.
    fn evaluate_not(&self, index: &InvertedIndex, query: &str) -> PostingSet {
        let segments = split_on_operator(query, Operator::Not);

        let mut universe = index.term_universe();
        if segments.len() == 2 {
            for excluded in index.postings(&segments[1]) {
                universe.remove(excluded);
            }
        }
        universe
    }

    /// Union the postings of each individual query token.
    fn evaluate_terms(&self, index: &InvertedIndex, tokens: &[String]) -> PostingSet {
        let mut result = PostingSet::new();
        for token in tokens {
            result.extend(index.postings(token).iter().cloned());
        }
        result
    }
}

impl std::fmt::Debug for QueryEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEvaluator")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
