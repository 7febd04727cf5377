//! Benchmarks for the matcher and the per-keystroke ranking loop.
//!
//! Simulates realistic launcher sizes:
//! - small:  ~50 entries   (built-in commands only)
//! - medium: ~500 entries  (commands + installed apps)
//! - large:  ~2000 entries (commands + apps + plugin entries)
//!
//! Run with: cargo bench
//!
//! Library compared:
//! - fuzzy-matcher: FZF-style fuzzy matching (SkimMatcherV2)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fray::{match_query, rank};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Candidate list sizes matching real-world launcher setups
const LIST_SIZES: &[(&str, usize)] = &[("small", 50), ("medium", 500), ("large", 2000)];

/// Vocabulary for plausible command labels
const VERBS: &[&str] = &[
    "Open", "Close", "Toggle", "Show", "Hide", "Restart", "Search", "Create", "Delete", "Rename",
    "Copy", "Move", "Lock", "Export", "Import",
];
const NOUNS: &[&str] = &[
    "Settings", "Window", "Terminal", "Browser", "Clipboard", "History", "Screenshot", "Session",
    "Workspace", "Project", "Snippet", "Bookmark", "Theme", "Extension", "Display",
];

/// Deterministic candidate list: every verb/noun pair, cycled to `size`.
fn build_candidates(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            let verb = VERBS[i % VERBS.len()];
            let noun = NOUNS[(i / VERBS.len()) % NOUNS.len()];
            format!("{} {} {}", verb, noun, i)
        })
        .collect()
}

/// Queries of the shapes a launcher sees: initials, prefixes, multi-term.
const QUERIES: &[&str] = &["os", "term", "open set", "clipb", "xqzv"];

fn bench_single_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_match");
    for query in QUERIES {
        group.bench_with_input(BenchmarkId::new("fray", query), query, |b, q| {
            b.iter(|| match_query(black_box(q), black_box("Open Settings Dialog")));
        });
    }

    let skim = SkimMatcherV2::default();
    for query in QUERIES {
        group.bench_with_input(BenchmarkId::new("fuzzy-matcher", query), query, |b, q| {
            b.iter(|| skim.fuzzy_indices(black_box("Open Settings Dialog"), black_box(q)));
        });
    }
    group.finish();
}

fn bench_rank_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_keystroke");
    for (name, size) in LIST_SIZES {
        let candidates = build_candidates(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("fray", name), &candidates, |b, cands| {
            b.iter(|| rank(black_box("open set"), cands, 10));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("fray_parallel", name),
            &candidates,
            |b, cands| {
                b.iter(|| fray::rank_parallel(black_box("open set"), cands, 10));
            },
        );

        let skim = SkimMatcherV2::default();
        group.bench_with_input(
            BenchmarkId::new("fuzzy-matcher", name),
            &candidates,
            |b, cands| {
                b.iter(|| {
                    let mut scored: Vec<(i64, &String)> = cands
                        .iter()
                        .filter_map(|cand| {
                            skim.fuzzy_match(cand, black_box("open set"))
                                .map(|score| (score, cand))
                        })
                        .collect();
                    scored.sort_by(|a, b| b.0.cmp(&a.0));
                    scored.truncate(10);
                    scored
                });
            },
        );
    }
    group.finish();
}

fn bench_worst_case_scan(c: &mut Criterion) {
    // A long candidate that almost matches forces the full linear scan.
    let long_label = "ab ".repeat(300) + "almost";
    c.bench_function("worst_case_scan", |b| {
        b.iter(|| match_query(black_box("abz"), black_box(&long_label)));
    });
}

criterion_group!(
    benches,
    bench_single_match,
    bench_rank_keystroke,
    bench_worst_case_scan
);
criterion_main!(benches);
