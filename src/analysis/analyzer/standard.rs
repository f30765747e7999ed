//! Standard analyzer that provides the default retrieval pipeline.
//!
//! This analyzer uses a word tokenizer (maximal runs of word characters)
//! followed by lowercase normalization. Every word is kept: there is no
//! stop word filtering, so common words like "the" become index terms.
//!
//! # Pipeline
//!
//! 1. WordTokenizer (`\w+`)
//! 2. LowercaseFilter
//!
//! # Examples
//!
//! ```
//! use falx::analysis::analyzer::analyzer::Analyzer;
//! use falx::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("Hello, World!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "hello");
//! assert_eq!(tokens[1].text, "world");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::word::WordTokenizer;
use crate::error::Result;

/// A standard analyzer combining word tokenization and lowercasing.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(WordTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("standard".to_string());

        Ok(StandardAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new().expect("Standard analyzer should be creatable with default settings")
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let tokens: Vec<Token> = analyzer.analyze("Hello the World").unwrap().collect();

        // No stop word filtering - every word survives
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "the");
        assert_eq!(tokens[2].text, "world");
    }

    #[test]
    fn test_standard_analyzer_term_set_collapses_duplicates() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let terms = analyzer.term_set("The cat sat on the mat").unwrap();

        assert_eq!(terms.len(), 5);
        assert!(terms.contains("the"));
        assert!(terms.contains("cat"));
        assert!(terms.contains("sat"));
        assert!(terms.contains("on"));
        assert!(terms.contains("mat"));
    }

    #[test]
    fn test_standard_analyzer_empty_text() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let terms = analyzer.term_set("").unwrap();
        assert!(terms.is_empty());
    }
}
