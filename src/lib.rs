//! # Falx
//!
//! A small Boolean full-text retrieval library for Rust.
//!
//! Falx builds an inverted index over an in-memory set of text documents
//! and evaluates single-operator Boolean queries (AND / OR / NOT) against
//! it.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Flexible text analysis pipeline (tokenizer + filters)
//! - In-memory inverted index with set-valued postings
//! - Best-effort Boolean query evaluation that never fails a lookup
//!
//! ## Example
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
//! let hits = engine.search("cat and sat").unwrap();
//! assert!(hits.contains("doc1"));
//! assert!(!hits.contains("doc2"));
//! ```

pub mod analysis;
pub mod cli;
pub mod engine;
pub mod error;
pub mod index;
pub mod query;

pub mod prelude {
    pub use crate::analysis::analyzer::Analyzer;
    pub use crate::analysis::analyzer::standard::StandardAnalyzer;
    pub use crate::engine::RetrievalEngine;
    pub use crate::error::{FalxError, Result};
    pub use crate::index::inverted::{IndexBuilder, InvertedIndex};
    pub use crate::query::evaluator::QueryEvaluator;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
