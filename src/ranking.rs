// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking a candidate list: match, filter, sort, truncate.
//!
//! This is the merge step a launcher host runs on every keystroke: one
//! [`match_query`](crate::match_query) call per candidate, keep the
//! successes, sort best-first, cut to the display limit.
//!
//! The sort is a total order so output is fully deterministic:
//!
//! 1. score, descending
//! 2. span, ascending (tighter clusters first)
//! 3. first matched position, ascending (earlier hits first)
//! 4. candidate text, lexicographic ascending
//!
//! Matching is stateless and side-effect-free, so the `parallel` feature
//! fans candidates out across a rayon pool. Both variants use the identical
//! comparator and therefore produce identical output.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::matcher::match_query;
use crate::types::{MatchResult, RankedCandidate};

/// Total order over ranked candidates, best first.
fn compare(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.result
        .score
        .cmp(&a.result.score)
        .then_with(|| a.result.span().cmp(&b.result.span()))
        .then_with(|| a.result.first_position().cmp(&b.result.first_position()))
        .then_with(|| a.text.cmp(&b.text))
}

fn sort_and_truncate(mut ranked: Vec<RankedCandidate>, limit: usize) -> Vec<RankedCandidate> {
    ranked.sort_by(compare);
    ranked.truncate(limit);
    ranked
}

fn to_ranked(index: usize, text: &str, result: MatchResult) -> Option<RankedCandidate> {
    result.success.then(|| RankedCandidate {
        index,
        text: text.to_string(),
        result,
    })
}

/// Rank `candidates` against `query`, keeping at most `limit` results.
///
/// Failed matches are dropped; the rest come back best-first under the
/// module-level tie-break chain. `index` in each result points back into
/// `candidates`.
///
/// # Examples
///
/// ```
/// use fray::rank;
///
/// let candidates = ["Git Commit", "Grep Code", "Quit"];
/// let top = rank("gc", &candidates, 10);
/// assert_eq!(top[0].text, "Git Commit");
/// ```
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S], limit: usize) -> Vec<RankedCandidate> {
    let ranked = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let text = text.as_ref();
            to_ranked(index, text, match_query(query, text))
        })
        .collect();
    sort_and_truncate(ranked, limit)
}

/// Parallel [`rank`]: one matching task per candidate on the rayon pool.
///
/// Worth it from a few thousand candidates up; below that the pool overhead
/// eats the win. Output is byte-for-byte identical to [`rank`].
#[cfg(feature = "parallel")]
pub fn rank_parallel<S: AsRef<str> + Sync>(
    query: &str,
    candidates: &[S],
    limit: usize,
) -> Vec<RankedCandidate> {
    let ranked = candidates
        .par_iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let text = text.as_ref();
            to_ranked(index, text, match_query(query, text))
        })
        .collect();
    sort_and_truncate(ranked, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANDIDATES: [&str; 5] = [
        "Open Settings Dialog",
        "Git Commit",
        "Git Checkout Main",
        "Quit",
        "Lock Screen",
    ];

    #[test]
    fn failed_matches_are_dropped() {
        let ranked = rank("zzz", &CANDIDATES, 10);
        assert!(ranked.is_empty());
    }

    #[test]
    fn results_are_sorted_best_first() {
        let ranked = rank("git", &CANDIDATES, 10);
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].result.score >= ranked[1].result.score);
        for entry in &ranked {
            assert!(entry.text.to_lowercase().contains("git"));
        }
    }

    #[test]
    fn limit_truncates_after_sorting() {
        let all = rank("i", &CANDIDATES, 10);
        let top = rank("i", &CANDIDATES, 1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0], all[0]);
    }

    #[test]
    fn index_points_into_input_slice() {
        let ranked = rank("quit", &CANDIDATES, 10);
        assert_eq!(ranked[0].index, 3);
        assert_eq!(CANDIDATES[ranked[0].index], ranked[0].text);
    }

    #[test]
    fn equal_scores_break_ties_lexicographically() {
        // Identical labels except the last char: same score, same span, same
        // first position, so the text decides.
        let ranked = rank("pref", &["prefix-b", "prefix-a"], 10);
        assert_eq!(ranked[0].text, "prefix-a");
        assert_eq!(ranked[1].text, "prefix-b");
    }

    #[test]
    fn empty_query_ranks_everything() {
        let ranked = rank("", &CANDIDATES, 10);
        assert_eq!(ranked.len(), CANDIDATES.len());
        // All scores equal, so ordering falls through to the text itself.
        let mut texts: Vec<&str> = CANDIDATES.to_vec();
        texts.sort_unstable();
        let got: Vec<&str> = ranked.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(got, texts);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_serial_exactly() {
        let serial = rank("gc", &CANDIDATES, 10);
        let parallel = rank_parallel("gc", &CANDIDATES, 10);
        assert_eq!(serial, parallel);
    }
}
