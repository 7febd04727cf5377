// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value types a match produces.
//!
//! Everything here is a plain value: freely copyable, no lifecycle beyond one
//! match call, no shared state. The matcher is a pure function from two
//! strings into a [`MatchResult`]; ranking wraps a batch of those into
//! [`RankedCandidate`]s.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **MatchResult**: when `success` is true, `matched_positions` is strictly
//!   increasing, every index is a valid char offset into the candidate, and
//!   `1 ≤ len ≤ (non-whitespace chars in query)`. When `success` is false,
//!   `score = 0` and `matched_positions` is empty. An empty query succeeds
//!   with `score = EMPTY_QUERY_SCORE` and empty positions.
//!
//! - Positions are **char offsets**, not byte offsets. Callers highlighting a
//!   candidate should index `candidate.chars()`, never slice bytes.

use serde::{Deserialize, Serialize};

/// Outcome of matching one query against one candidate label.
///
/// Produced by [`crate::match_query`]. `matched_positions` exists purely for
/// rendering (e.g. bolding matched characters); nothing downstream should
/// feed it back into matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Whether every query term was found, in order, as a subsequence of the
    /// candidate (case-insensitive).
    pub success: bool,

    /// Comparable score, higher is better. Only meaningful when `success` is
    /// true; always 0 on failure.
    pub score: i32,

    /// Char offsets into the candidate that satisfied the query, strictly
    /// increasing.
    pub matched_positions: Vec<usize>,
}

impl MatchResult {
    /// The canonical non-match: `success = false`, `score = 0`, no positions.
    pub const NO_MATCH: MatchResult = MatchResult {
        success: false,
        score: 0,
        matched_positions: Vec::new(),
    };

    /// Distance between the first and last matched position, or 0 when fewer
    /// than two characters matched. Used as the first ranking tie-break:
    /// tighter clusters beat scattered hits.
    pub fn span(&self) -> usize {
        match (self.matched_positions.first(), self.matched_positions.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0,
        }
    }

    /// Offset of the first matched character. `usize::MAX` when nothing
    /// matched, so empty-query matches sort after real ones on this key.
    pub fn first_position(&self) -> usize {
        self.matched_positions.first().copied().unwrap_or(usize::MAX)
    }
}

/// One entry in a ranked candidate list.
///
/// `index` is the candidate's position in the caller's input slice, so a host
/// can map results back to its own entries without string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    /// Index into the input candidate slice.
    pub index: usize,

    /// The candidate text, carried for display.
    pub text: String,

    /// The match that placed this candidate.
    pub result: MatchResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_of_scattered_match() {
        let result = MatchResult {
            success: true,
            score: 10,
            matched_positions: vec![2, 5, 9],
        };
        assert_eq!(result.span(), 7);
        assert_eq!(result.first_position(), 2);
    }

    #[test]
    fn span_of_empty_match_is_zero() {
        assert_eq!(MatchResult::NO_MATCH.span(), 0);
        assert_eq!(MatchResult::NO_MATCH.first_position(), usize::MAX);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn serializes_with_camel_case_field_names() {
        let result = MatchResult {
            success: true,
            score: 42,
            matched_positions: vec![0, 1],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"matchedPositions\":[0,1]"));
    }
}
