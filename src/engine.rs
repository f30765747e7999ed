//! Retrieval engine tying analysis, indexing, and query evaluation together.
//!
//! [`RetrievalEngine`] is the session object a host application owns: it
//! keeps the ingested documents and the inverted index built from them,
//! and answers queries against that snapshot. The engine holds no global
//! state; the host constructs it and passes it around explicitly.
//!
//! Ingestion replaces the session wholesale: re-indexing discards the
//! prior documents and index and rebuilds from scratch. There is no
//! incremental merge.
//!
//! # Examples
//!
//! ```
//! use falx::engine::RetrievalEngine;
//!
//! let mut engine = RetrievalEngine::new().unwrap();
//! engine
//!     .index_texts(vec![
//!         "The cat sat on the mat".to_string(),
//!         "The dog sat on the log".to_string(),
//!     ])
//!     .unwrap();
//!
//! let hits = engine.search("cat or dog").unwrap();
//! assert_eq!(hits.len(), 2);
//! assert_eq!(engine.document("doc1"), Some("The cat sat on the mat"));
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::error::Result;
use crate::index::inverted::{IndexBuilder, InvertedIndex, PostingSet};
use crate::query::evaluator::QueryEvaluator;

/// A single-snapshot Boolean retrieval session.
pub struct RetrievalEngine {
    builder: IndexBuilder,
    evaluator: QueryEvaluator,
    documents: BTreeMap<String, String>,
    index: InvertedIndex,
}

impl RetrievalEngine {
    /// Create a new engine with the standard analyzer.
    pub fn new() -> Result<Self> {
        Ok(Self::with_analyzer(Arc::new(StandardAnalyzer::new()?)))
    }

    /// Create a new engine with a custom analyzer.
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        RetrievalEngine {
            builder: IndexBuilder::new(analyzer.clone()),
            evaluator: QueryEvaluator::new(analyzer),
            documents: BTreeMap::new(),
            index: InvertedIndex::new(),
        }
    }

    /// Ingest raw texts, assigning identifiers "doc1", "doc2", … in
    /// order, and rebuild the index from scratch.
    pub fn index_texts(&mut self, texts: Vec<String>) -> Result<()> {
        let documents: BTreeMap<String, String> = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| (format!("doc{}", i + 1), text))
            .collect();
        self.index_documents(documents)
    }

    /// Ingest a mapping of document identifier to raw text and rebuild
    /// the index from scratch, discarding all prior session state.
    pub fn index_documents(&mut self, documents: BTreeMap<String, String>) -> Result<()> {
        let index = self
            .builder
            .build(documents.iter().map(|(id, text)| (id.clone(), text.clone())))?;

        self.documents = documents;
        self.index = index;
        Ok(())
    }

    /// Evaluate a Boolean query against the current index snapshot.
    pub fn search(&self, query: &str) -> Result<PostingSet> {
        self.evaluator.evaluate(&self.index, query)
    }

    /// Look up the raw text of an ingested document.
    pub fn document(&self, doc_id: &str) -> Option<&str> {
        self.documents.get(doc_id).map(|s| s.as_str())
    }

    /// The ingested documents, ordered by identifier.
    pub fn documents(&self) -> &BTreeMap<String, String> {
        &self.documents
    }

    /// The current index snapshot.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}

impl std::fmt::Debug for RetrievalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalEngine")
            .field("doc_count", &self.documents.len())
            .field("term_count", &self.index.term_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_assigns_ids_in_order() {
        let mut engine = RetrievalEngine::new().unwrap();
        engine
            .index_texts(vec!["first text".to_string(), "second text".to_string()])
            .unwrap();

        assert_eq!(engine.document("doc1"), Some("first text"));
        assert_eq!(engine.document("doc2"), Some("second text"));
        assert_eq!(engine.document("doc3"), None);
    }

    #[test]
    fn test_engine_search() {
        let mut engine = RetrievalEngine::new().unwrap();
        engine
            .index_texts(vec![
                "The cat sat on the mat".to_string(),
                "The dog sat on the log".to_string(),
            ])
            .unwrap();

        let hits = engine.search("cat and sat").unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits.contains("doc1"));
    }

    #[test]
    fn test_reindex_replaces_prior_state() {
        let mut engine = RetrievalEngine::new().unwrap();
        engine.index_texts(vec!["alpha beta".to_string()]).unwrap();
        assert!(engine.index().contains_term("alpha"));

        engine.index_texts(vec!["gamma delta".to_string()]).unwrap();

        // No residual keys or documents from the previous build
        assert!(!engine.index().contains_term("alpha"));
        assert!(engine.index().contains_term("gamma"));
        assert_eq!(engine.documents().len(), 1);
        assert_eq!(engine.document("doc1"), Some("gamma delta"));
        assert!(engine.search("alpha").unwrap().is_empty());
    }

    #[test]
    fn test_empty_engine() {
        let engine = RetrievalEngine::new().unwrap();

        assert!(engine.index().is_empty());
        assert!(engine.search("anything").unwrap().is_empty());
    }
}
