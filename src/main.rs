// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::Read;

use clap::Parser;

use fray::cli::{display, Cli, Commands};
use fray::{match_query, normalize, rank};

fn main() {
    let cli = Cli::parse();

    let run = match cli.command {
        Commands::Match { query, candidate } => run_match(&query, &candidate),
        Commands::Rank {
            query,
            input,
            limit,
            fold_diacritics,
        } => run_rank(&query, &input, limit, fold_diacritics),
    };

    if let Err(e) = run {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run_match(query: &str, candidate: &str) -> Result<(), String> {
    let result = match_query(query, candidate);
    display::print_match(query, candidate, &result, display::use_color());
    Ok(())
}

fn run_rank(query: &str, input: &str, limit: usize, fold_diacritics: bool) -> Result<(), String> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(input).map_err(|e| format!("Failed to read {}: {}", input, e))?
    };

    let mut candidates: Vec<String> = serde_json::from_str(&raw)
        .map_err(|e| format!("Expected a JSON array of strings: {}", e))?;

    let query = if fold_diacritics {
        candidates = candidates.iter().map(|c| normalize(c)).collect();
        normalize(query)
    } else {
        query.to_string()
    };

    let ranked = rank(&query, &candidates, limit);
    display::print_ranked(&ranked, display::use_color());
    Ok(())
}
