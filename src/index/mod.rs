//! Inverted index construction for Falx.
//!
//! This module provides the in-memory inverted index mapping terms to
//! posting sets, and the builder that populates it from a document
//! mapping.

pub mod inverted;

// Re-export commonly used types
pub use inverted::{IndexBuilder, InvertedIndex, PostingSet};
