// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for match results.
//!
//! Matched characters render bold cyan when stdout is a TTY and `NO_COLOR`
//! is unset; otherwise a caret line marks the positions so output stays
//! readable in pipelines and test logs.

use crate::types::{MatchResult, RankedCandidate};

const HIGHLIGHT: &str = "\x1b[1;36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Should output use ANSI color? TTY check plus `NO_COLOR` opt-out.
pub fn use_color() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
}

/// Render `text` with the matched char offsets emphasized.
///
/// With color: matched chars wrapped in bold cyan. Without: the text
/// unchanged, followed by a newline and a caret line (`^` under each
/// matched char). Positions are char offsets, so multi-byte labels line up.
pub fn highlight(text: &str, positions: &[usize], color: bool) -> String {
    if color {
        let mut out = String::with_capacity(text.len() + positions.len() * 8);
        let mut next = positions.iter().peekable();
        for (idx, ch) in text.chars().enumerate() {
            if next.peek() == Some(&&idx) {
                out.push_str(HIGHLIGHT);
                out.push(ch);
                out.push_str(RESET);
                next.next();
            } else {
                out.push(ch);
            }
        }
        out
    } else {
        let mut carets = String::new();
        let mut next = positions.iter().peekable();
        for (idx, _) in text.chars().enumerate() {
            if next.peek() == Some(&&idx) {
                carets.push('^');
                next.next();
            } else {
                carets.push(' ');
            }
        }
        format!("{}\n{}", text, carets.trim_end())
    }
}

/// Print one match verdict: score, positions, highlighted candidate.
pub fn print_match(query: &str, candidate: &str, result: &MatchResult, color: bool) {
    if result.success {
        println!("match    query={:?} score={}", query, result.score);
        println!("positions {:?}", result.matched_positions);
        println!("{}", highlight(candidate, &result.matched_positions, color));
    } else {
        println!("no match  query={:?}", query);
    }
}

/// Print a ranked leaderboard, one line per candidate.
pub fn print_ranked(ranked: &[RankedCandidate], color: bool) {
    if ranked.is_empty() {
        println!("no matches");
        return;
    }
    let width = ranked
        .iter()
        .map(|r| r.result.score.to_string().len())
        .max()
        .unwrap_or(1);
    for entry in ranked {
        let label = highlight(&entry.text, &entry.result.matched_positions, color);
        if color {
            println!(
                "{}{:>width$}{}  {}",
                DIM,
                entry.result.score,
                RESET,
                label,
                width = width
            );
        } else {
            println!("{:>width$}  {}", entry.result.score, label, width = width);
        }
    }
}
