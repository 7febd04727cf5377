// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matching engine: greedy per-term subsequence search with scoring.
//!
//! One query against one candidate label. The query splits on whitespace into
//! terms; each term must appear, in order, as a subsequence of the candidate.
//! A single cursor advances left to right, so a later term can only match
//! after the previous term's last matched character. Terms need not be
//! contiguous, but they cannot interleave.
//!
//! Placement is greedy leftmost per term. This is documented policy, not an
//! accident: a different placement of an earlier term could occasionally
//! unlock a better-scoring overall match, but greedy placement is O(n),
//! reproducible, and what the ranking contract promises. Cross-term
//! backtracking would change ranking behavior and belongs in a separate
//! opt-in algorithm if anyone ever wants it.
//!
//! Every input shape is valid. An empty query matches everything at the
//! fixed minimal score; an empty candidate matches nothing; failure is
//! `success = false`, never an error.

use crate::scoring::{self, EMPTY_QUERY_SCORE};
use crate::types::MatchResult;

/// Case-insensitive char equality via Unicode case folding.
///
/// Fast path on exact equality; otherwise compares full `to_lowercase`
/// expansions so dotted/dotless i and friends fold the same way
/// `str::to_lowercase` would.
#[inline]
fn fold_eq(query_ch: char, cand_ch: char) -> bool {
    query_ch == cand_ch || query_ch.to_lowercase().eq(cand_ch.to_lowercase())
}

/// Match `query` against `candidate`.
///
/// Returns a [`MatchResult`] for every input shape; never panics, never
/// errors. Deterministic: fixed inputs always produce the identical result.
/// Positions in the result are char offsets into `candidate`, strictly
/// increasing.
///
/// Runs in O(|query| + |candidate|): the scan cursor only moves forward, and
/// a term that cannot complete fails the whole match immediately.
///
/// # Examples
///
/// ```
/// use fray::match_query;
///
/// let m = match_query("gcm", "Git Commit");
/// assert!(m.success);
/// assert_eq!(m.matched_positions, vec![0, 4, 6]);
///
/// assert!(!match_query("xyz", "abc").success);
/// ```
pub fn match_query(query: &str, candidate: &str) -> MatchResult {
    let terms: Vec<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        // Trivial universal match: everything matches the empty query.
        return MatchResult {
            success: true,
            score: EMPTY_QUERY_SCORE,
            matched_positions: Vec::new(),
        };
    }

    let cand: Vec<char> = candidate.chars().collect();
    if cand.is_empty() {
        return MatchResult::NO_MATCH;
    }

    let mut positions: Vec<usize> = Vec::with_capacity(query.len().min(cand.len()));
    let mut score: i32 = 0;
    let mut cursor = 0usize;

    for term in &terms {
        for query_ch in term.chars() {
            let mut found = None;
            for (offset, &cand_ch) in cand[cursor..].iter().enumerate() {
                if fold_eq(query_ch, cand_ch) {
                    found = Some(cursor + offset);
                    break;
                }
            }
            let pos = match found {
                Some(pos) => pos,
                // Short-circuit: no scoring for partial matches.
                None => return MatchResult::NO_MATCH,
            };

            let consecutive = positions.last() == Some(&pos.wrapping_sub(1));
            let prev = if pos > 0 { Some(cand[pos - 1]) } else { None };
            score += scoring::match_bonus(query_ch, cand[pos], prev, consecutive);
            positions.push(pos);
            cursor = pos + 1;
        }
    }

    let matched = positions.len();
    let span = positions[positions.len() - 1] - positions[0];
    score -= scoring::span_penalty(span, matched);
    score += scoring::coverage_bonus(matched, cand.len());

    MatchResult {
        success: true,
        score,
        matched_positions: positions,
    }
}
