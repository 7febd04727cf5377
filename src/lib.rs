//! Fuzzy subsequence matching for launcher-style candidate ranking.
//!
//! This crate scores a user's typed query against short candidate labels
//! (command titles, app names, plugin entries) and reports which characters
//! matched so a UI can highlight them. One query against one candidate at a
//! time; ranking a bounded list per keystroke, not indexing a corpus.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   types.rs  │────▶│  matcher.rs  │────▶│ ranking.rs  │
//! │ (MatchResult│     │ (match_query)│     │ (rank,      │
//! │  RankedCand)│     │              │     │  rank_parallel)
//! └─────────────┘     └──────┬───────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │  scoring.rs  │
//!                     │ (constants,  │
//!                     │  boundaries) │
//!                     └──────────────┘
//! ```
//!
//! # Matching contract
//!
//! - The query splits on whitespace into terms; each term must appear in
//!   order as a case-insensitive subsequence of the candidate, each term
//!   strictly after the previous term's last matched character.
//! - Placement is greedy leftmost per term - the documented, reproducible
//!   policy (see `matcher` module docs).
//! - Scoring heuristics in precedence order: consecutive runs, word
//!   boundaries, exact case, tight spans, coverage (see `scoring`).
//! - Every input is valid; "no match" is a result, never an error.
//! - Stateless and side-effect-free: safe to call from any number of
//!   threads without synchronization.
//!
//! # Usage
//!
//! ```
//! use fray::{match_query, rank};
//!
//! let m = match_query("gcm", "Git Commit");
//! assert!(m.success);
//! assert_eq!(m.matched_positions, vec![0, 4, 6]);
//!
//! let top = rank("open set", &["Open Settings", "OpenSSL Docs"], 5);
//! assert_eq!(top[0].text, "Open Settings");
//! ```

// Module declarations
mod matcher;
mod ranking;
mod scoring;
mod types;
mod utils;

pub mod cli;

// Re-exports for public API
pub use matcher::match_query;
pub use ranking::rank;
#[cfg(feature = "parallel")]
pub use ranking::rank_parallel;
pub use scoring::{
    coverage_bonus, is_word_boundary, match_bonus, span_penalty, CASE_MATCH_BONUS,
    CONSECUTIVE_BONUS, COVERAGE_SCALE, EMPTY_QUERY_SCORE, GAP_PENALTY, SCORE_MATCH_BASE,
    WORD_BOUNDARY_BONUS,
};
pub use types::{MatchResult, RankedCandidate};
pub use utils::normalize;
