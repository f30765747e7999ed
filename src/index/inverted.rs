//! In-memory inverted index implementation.
//!
//! The index maps each term to the set of document identifiers whose text
//! contains that term. Postings are sets, not lists: a term occurring
//! multiple times in one document contributes that document exactly once.
//!
//! The index is built once per document batch and is read-only
//! afterwards. Rebuilding for a new batch produces a fresh index with no
//! residual state.
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::standard::StandardAnalyzer;
//! use falx::index::inverted::IndexBuilder;
//! use std::sync::Arc;
//!
//! let builder = IndexBuilder::new(Arc::new(StandardAnalyzer::new().unwrap()));
//! let index = builder
//!     .build(vec![
//!         ("doc1".to_string(), "The cat sat".to_string()),
//!         ("doc2".to_string(), "The dog sat".to_string()),
//!     ])
//!     .unwrap();
//!
//! assert!(index.postings("sat").contains("doc1"));
//! assert!(index.postings("sat").contains("doc2"));
//! assert!(index.postings("cat").contains("doc1"));
//! assert!(index.postings("zzz").is_empty());
//! ```

use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// The set of document identifiers associated with a term.
pub type PostingSet = AHashSet<String>;

/// An inverted index mapping terms to posting sets.
///
/// A document identifier appears under term T if and only if T occurs as
/// a token anywhere in that document's text. Terms absent from every
/// document never appear as keys; consumers looking up an absent term get
/// an empty set, never an error.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    /// Term to posting-set mapping.
    postings: AHashMap<String, PostingSet>,
    /// Number of documents the index was built from.
    doc_count: usize,
    /// Shared empty set returned for absent terms.
    empty: PostingSet,
}

impl InvertedIndex {
    /// Create a new empty inverted index.
    pub fn new() -> Self {
        InvertedIndex {
            postings: AHashMap::new(),
            doc_count: 0,
            empty: AHashSet::new(),
        }
    }

    /// Get the posting set for a term.
    ///
    /// Absent terms resolve to a shared empty set rather than an error or
    /// an implicit insertion. The lookup is verbatim: the term is matched
    /// by string equality against index keys and is not re-tokenized.
    pub fn postings(&self, term: &str) -> &PostingSet {
        self.postings.get(term).unwrap_or(&self.empty)
    }

    /// Check whether a term is a key in this index.
    pub fn contains_term(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Iterate over the terms (keys) of this index.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(|s| s.as_str())
    }

    /// The set of all index keys (distinct terms).
    pub fn term_universe(&self) -> AHashSet<String> {
        self.postings.keys().cloned().collect()
    }

    /// Number of distinct terms in this index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of documents this index was built from.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Check if this index has no terms.
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Add a document identifier to a term's posting set, creating the
    /// set on first occurrence.
    fn add_posting(&mut self, term: String, doc_id: &str) {
        self.postings
            .entry(term)
            .or_default()
            .insert(doc_id.to_string());
    }
}

/// Builds an [`InvertedIndex`] from a document mapping using an analyzer.
#[derive(Clone)]
pub struct IndexBuilder {
    analyzer: Arc<dyn Analyzer>,
}

impl IndexBuilder {
    /// Create a new index builder with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        IndexBuilder { analyzer }
    }

    /// Get the analyzer used by this builder.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Build an inverted index from a mapping of document identifier to
    /// raw text.
    ///
    /// Iteration order of the mapping is irrelevant for correctness. An
    /// empty mapping yields an empty index.
    pub fn build<I>(&self, documents: I) -> Result<InvertedIndex>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut index = InvertedIndex::new();

        for (doc_id, text) in documents {
            let terms = self.analyzer.term_set(&text)?;
            for term in terms {
                index.add_posting(term, &doc_id);
            }
            index.doc_count += 1;
        }

        Ok(index)
    }
}

impl std::fmt::Debug for IndexBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexBuilder")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::standard::StandardAnalyzer;

    fn builder() -> IndexBuilder {
        IndexBuilder::new(Arc::new(StandardAnalyzer::new().unwrap()))
    }

    fn docs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn test_build_empty_mapping() {
        let index = builder().build(Vec::new()).unwrap();

        assert!(index.is_empty());
        assert_eq!(index.term_count(), 0);
        assert_eq!(index.doc_count(), 0);
    }

    #[test]
    fn test_build_postings() {
        let index = builder()
            .build(docs(&[
                ("doc1", "The cat sat on the mat"),
                ("doc2", "The dog sat on the log"),
            ]))
            .unwrap();

        assert_eq!(index.doc_count(), 2);

        let sat = index.postings("sat");
        assert_eq!(sat.len(), 2);
        assert!(sat.contains("doc1"));
        assert!(sat.contains("doc2"));

        let cat = index.postings("cat");
        assert_eq!(cat.len(), 1);
        assert!(cat.contains("doc1"));

        let dog = index.postings("dog");
        assert_eq!(dog.len(), 1);
        assert!(dog.contains("doc2"));
    }

    #[test]
    fn test_duplicate_occurrences_counted_once() {
        let index = builder()
            .build(docs(&[("doc1", "tick tick tick")]))
            .unwrap();

        assert_eq!(index.postings("tick").len(), 1);
        assert!(index.postings("tick").contains("doc1"));
    }

    #[test]
    fn test_absent_term_is_empty_not_inserted() {
        let index = builder().build(docs(&[("doc1", "hello")])).unwrap();

        assert!(index.postings("missing").is_empty());
        // The miss must not create a key
        assert!(!index.contains_term("missing"));
        assert_eq!(index.term_count(), 1);
    }

    #[test]
    fn test_case_folded_terms() {
        let index = builder().build(docs(&[("doc1", "Cat CAT cAt")])).unwrap();

        assert!(index.contains_term("cat"));
        assert!(!index.contains_term("Cat"));
        assert_eq!(index.term_count(), 1);
    }

    #[test]
    fn test_term_universe() {
        let index = builder()
            .build(docs(&[("doc1", "a b"), ("doc2", "b c")]))
            .unwrap();

        let universe = index.term_universe();
        assert_eq!(universe.len(), 3);
        assert!(universe.contains("a"));
        assert!(universe.contains("b"));
        assert!(universe.contains("c"));
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let forward = builder()
            .build(docs(&[("doc1", "alpha beta"), ("doc2", "beta gamma")]))
            .unwrap();
        let reversed = builder()
            .build(docs(&[("doc2", "beta gamma"), ("doc1", "alpha beta")]))
            .unwrap();

        assert_eq!(forward.term_universe(), reversed.term_universe());
        assert_eq!(forward.postings("beta"), reversed.postings("beta"));
    }
}
