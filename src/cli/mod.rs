// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fray command-line interface.
//!
//! Two subcommands: `match` runs one query/candidate pair and shows the
//! verdict with highlighted positions, `rank` scores a JSON array of
//! candidate labels and prints the leaderboard. Both exist mainly for
//! eyeballing scoring changes; the library API is the real surface.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fray",
    about = "Fuzzy subsequence matcher for launcher-style candidate ranking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match one query against one candidate and show the result
    Match {
        /// The typed query (whitespace splits it into terms)
        query: String,

        /// The candidate label to score
        candidate: String,
    },

    /// Rank a list of candidate labels against a query
    Rank {
        /// The typed query
        query: String,

        /// Path to a JSON array of candidate strings, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Strip diacritics from query and candidates before matching
        ///
        /// Runs both sides through NFD normalization so "cafe" hits "Café".
        /// Positions then refer to the normalized text, which is also what
        /// gets printed.
        #[arg(long)]
        fold_diacritics: bool,
    },
}
