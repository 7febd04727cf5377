// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match ranking.
//!
//! Five heuristics decide how "intentional" a subsequence match looks, in
//! strict precedence order:
//!
//! 1. **Consecutive run** - a matched char right after the previous matched
//!    char. Typing adjacent letters is the strongest signal of intent.
//! 2. **Word boundary** - a match that starts a word (string start, after a
//!    separator, after a lower→upper transition, after a digit→letter
//!    transition). "gc" hitting the initials of "Git Commit" beats "gc"
//!    buried inside "logcat".
//! 3. **Exact case** - the query char equals the candidate char including
//!    case. A bonus, never a requirement.
//! 4. **Span penalty** - every unmatched char sitting inside the matched
//!    span subtracts. Tight clusters beat scattered hits.
//! 5. **Coverage** - matching a larger share of the candidate wins, so exact
//!    or near-exact labels beat long labels with a small match embedded.
//!
//! # Key Invariant: Heuristic Dominance
//!
//! The constants satisfy, per matched character:
//!
//! ```text
//! CONSECUTIVE_BONUS > WORD_BOUNDARY_BONUS > CASE_MATCH_BONUS > GAP_PENALTY
//! ```
//!
//! The precedence ORDER is the contract; the exact values are tuning. A
//! matcher with different constants that preserve the ordering ranks
//! consistently relative to these rules, which is what downstream sort
//! stability depends on. `heuristic_dominance_ordering` in the test module
//! pins the ordering.
//!
//! # Constants
//!
//! | Constant            | Value | Why this value |
//! |---------------------|-------|----------------|
//! | SCORE_MATCH_BASE    | 16    | Every matched char counts; dwarfs all bonuses so more coverage can't lose to fewer, fancier chars |
//! | CONSECUTIVE_BONUS   | 8     | Strongest intent signal |
//! | WORD_BOUNDARY_BONUS | 6     | Below consecutive, above case |
//! | CASE_MATCH_BONUS    | 4     | Weakest per-char signal |
//! | GAP_PENALTY         | 1     | Per unmatched char inside the span; small so a long gap erodes, not erases, a match |
//! | COVERAGE_SCALE      | 32    | Full-coverage bonus; scaled down by candidate length |
//! | EMPTY_QUERY_SCORE   | 0     | The fixed minimal score for the trivial universal match |

/// Base score contributed by every matched character.
pub const SCORE_MATCH_BASE: i32 = 16;

/// Bonus for a matched character immediately following the previous matched
/// character (no gap).
pub const CONSECUTIVE_BONUS: i32 = 8;

/// Bonus for a matched character sitting at a word boundary.
pub const WORD_BOUNDARY_BONUS: i32 = 6;

/// Bonus when the query character equals the candidate character including
/// case, on top of the case-insensitive match.
pub const CASE_MATCH_BONUS: i32 = 4;

/// Penalty per unmatched character inside the matched span.
pub const GAP_PENALTY: i32 = 1;

/// Scale for the coverage bonus: `matched_chars * COVERAGE_SCALE / candidate_chars`.
pub const COVERAGE_SCALE: i32 = 32;

/// Score assigned to the trivial universal match of an empty query.
pub const EMPTY_QUERY_SCORE: i32 = 0;

/// Is `current` at a word boundary, given the candidate char before it?
///
/// A boundary is any of:
/// - start of the candidate (`prev` is `None`)
/// - after a non-alphanumeric separator (space, `-`, `_`, `.`, `/`, ...)
/// - a lowercase→uppercase transition (`fooBar` → boundary at `B`)
/// - a digit→letter transition (`mp4video` → boundary at `v`)
///
/// Letter→digit is deliberately NOT a boundary: trailing version digits
/// ("python3") read as part of the word, not the start of a new one.
pub fn is_word_boundary(prev: Option<char>, current: char) -> bool {
    match prev {
        None => true,
        Some(p) => {
            !p.is_alphanumeric()
                || (p.is_lowercase() && current.is_uppercase())
                || (p.is_numeric() && current.is_alphabetic())
        }
    }
}

/// Score contribution of one matched character.
///
/// `prev` is the candidate character immediately before `cand_ch` (None at
/// the string start); `consecutive` is whether the previous *matched*
/// character sits directly before this one.
pub fn match_bonus(query_ch: char, cand_ch: char, prev: Option<char>, consecutive: bool) -> i32 {
    let mut bonus = SCORE_MATCH_BASE;
    if consecutive {
        bonus += CONSECUTIVE_BONUS;
    }
    if is_word_boundary(prev, cand_ch) {
        bonus += WORD_BOUNDARY_BONUS;
    }
    if query_ch == cand_ch {
        bonus += CASE_MATCH_BONUS;
    }
    bonus
}

/// Penalty for slack inside the matched span.
///
/// `span` is `last - first` matched position; the span contains `span + 1`
/// characters, of which `matched` actually matched.
pub fn span_penalty(span: usize, matched: usize) -> i32 {
    let gaps = (span + 1).saturating_sub(matched);
    gaps as i32 * GAP_PENALTY
}

/// Bonus for the share of the candidate covered by the match.
///
/// Maxes out at [`COVERAGE_SCALE`] when every candidate character matched.
pub fn coverage_bonus(matched: usize, candidate_chars: usize) -> i32 {
    if candidate_chars == 0 {
        return 0;
    }
    (matched as i32 * COVERAGE_SCALE) / candidate_chars as i32
}
