//! Boolean operator detection and query splitting.
//!
//! These are two separate passes with different granularities:
//!
//! - [`detect_operator`] decides which branch a query takes by comparing
//!   whole word tokens against the literal operator words, in fixed
//!   priority order (AND, then OR, then NOT).
//! - [`split_on_operator`] divides the lowercased query into segments by
//!   plain substring search on `" and "` / `" or "` / `" not "`.
//!
//! Because detection is token-based and splitting is substring-based, the
//! two can disagree: "android" contains the substring "and" but never
//! triggers the AND branch, while a query that does trigger a branch may
//! split at positions that don't line up with token boundaries. This
//! divergence is retained behavior, not something to paper over.

use serde::{Deserialize, Serialize};

/// The single Boolean operator a query may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Intersect the posting sets of all segments.
    And,
    /// Union the posting sets of all segments.
    Or,
    /// Subtract the excluded segment's postings from the key universe.
    Not,
}

impl Operator {
    /// The literal lowercase word that triggers this operator.
    pub fn keyword(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
        }
    }

    /// The substring separator this operator splits the query on.
    pub fn separator(&self) -> &'static str {
        match self {
            Operator::And => " and ",
            Operator::Or => " or ",
            Operator::Not => " not ",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Classify a query by the presence of literal operator tokens.
///
/// Checked in fixed priority order: AND, then OR, then NOT. Returns
/// `None` when no operator word appears among the tokens. Comparison is
/// whole-token equality, so a token like "android" does not trigger AND.
pub fn detect_operator(tokens: &[String]) -> Option<Operator> {
    for op in [Operator::And, Operator::Or, Operator::Not] {
        if tokens.iter().any(|t| t == op.keyword()) {
            return Some(op);
        }
    }
    None
}

/// Split a lowercased query into trimmed segments on the operator's
/// separator substring.
///
/// The split is purely lexical: every occurrence of the separator divides
/// the query, independent of the token-based check that selected the
/// operator. Always yields at least one segment.
pub fn split_on_operator(query: &str, operator: Operator) -> Vec<String> {
    query
        .split(operator.separator())
        .map(|segment| segment.trim().to_string())
        .collect()
}
