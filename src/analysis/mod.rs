//! Text analysis module for Falx.
//!
//! This module provides the core text analysis functionality including
//! tokenization, filtering, and analysis pipelines. It's inspired by
//! Whoosh's analysis system.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
