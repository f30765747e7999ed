//! Boolean query classification and evaluation for Falx.
//!
//! Queries carry at most one Boolean operator (AND, OR, or NOT).
//! Classification and splitting are two deliberately distinct passes:
//! [`operator::detect_operator`] works on word tokens, while
//! [`operator::split_on_operator`] works on raw substrings of the
//! lowercased query. See the module docs of [`operator`] for why the two
//! granularities can disagree.

pub mod evaluator;
pub mod operator;

// Re-export commonly used types
pub use evaluator::QueryEvaluator;
pub use operator::{Operator, detect_operator, split_on_operator};
