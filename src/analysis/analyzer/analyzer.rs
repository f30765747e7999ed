//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for
//! text analysis in Falx. Analyzers combine tokenizers and filters to
//! transform raw text into normalized tokens.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Index
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`StandardAnalyzer`](super::standard::StandardAnalyzer) - Word tokenization + lowercasing
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom tokenizer + filter chains
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::analyzer::Analyzer;
//! use falx::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello World").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use ahash::AHashSet;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` to allow analyzers to be shared
/// safely across thread boundaries.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This is the main method that performs the complete analysis
    /// pipeline, including tokenization and all configured filters.
    /// Token order follows text order, and duplicate words produce
    /// duplicate tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Analyze the given text into its set of distinct terms.
    ///
    /// Duplicates are collapsed and order is discarded. Empty text
    /// yields an empty set; any string input is valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use falx::analysis::analyzer::analyzer::Analyzer;
    /// use falx::analysis::analyzer::standard::StandardAnalyzer;
    ///
    /// let analyzer = StandardAnalyzer::new().unwrap();
    /// let terms = analyzer.term_set("the cat and the hat").unwrap();
    ///
    /// assert_eq!(terms.len(), 4);
    /// assert!(terms.contains("the"));
    /// ```
    fn term_set(&self, text: &str) -> Result<AHashSet<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
