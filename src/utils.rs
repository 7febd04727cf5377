// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for accent-insensitive matching.
//!
//! The matcher itself only case-folds; callers that want "cafe" to hit
//! "Café" run both query and candidates through [`normalize`] first. The
//! CLI exposes this as `--fold-diacritics`.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for matching: lowercase, strip diacritics, collapse
/// whitespace.
///
/// - "Café" → "cafe"
/// - "naïve Łauncher" → "naive łauncher"
/// - "  Open   Settings " → "open settings"
///
/// With the `unicode-normalization` feature this NFD-decomposes and drops
/// combining marks before lowercasing. Without it, only lowercasing and
/// whitespace collapse happen (input assumed ASCII or pre-normalized).
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight fallback without the `unicode-normalization` dependency.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combining marks (Unicode category Mn) dropped after NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
