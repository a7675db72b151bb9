//! Benchmarks for the one-time model build
//!
//! Run with: cargo bench --package similarity
//!
//! The corpus is synthetic but shaped like real catalog text: a few dozen
//! recurring vocabulary words per document with zipf-ish repetition.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use similarity::{SimilarityMatrix, TfidfModel, scores_against};

const WORDS: &[&str] = &[
    "detective", "murder", "love", "war", "space", "family", "heist",
    "revenge", "journey", "secret", "city", "small", "town", "crime",
    "boss", "daughter", "father", "ship", "alien", "planet", "school",
    "team", "championship", "ghost", "haunted", "house", "road", "trip",
    "band", "music", "dream", "fight", "escape", "prison", "island",
];

/// Deterministic pseudo-random corpus; no RNG so runs are comparable.
fn synthetic_corpus(n_docs: usize) -> Vec<String> {
    (0..n_docs)
        .map(|d| {
            let len = 20 + (d * 7) % 30;
            let words: Vec<&str> = (0..len)
                .map(|w| WORDS[(d * 31 + w * 17 + (w * w) % 13) % WORDS.len()])
                .collect();
            words.join(" ")
        })
        .collect()
}

fn bench_fit_transform(c: &mut Criterion) {
    let texts = synthetic_corpus(1000);

    c.bench_function("fit_transform_1000_docs", |b| {
        b.iter(|| {
            let (model, vectors) = TfidfModel::fit_transform(black_box(&texts));
            black_box((model, vectors))
        })
    });
}

fn bench_matrix_build(c: &mut Criterion) {
    let texts = synthetic_corpus(1000);
    let (_, vectors) = TfidfModel::fit_transform(&texts);

    c.bench_function("matrix_build_1000_docs", |b| {
        b.iter(|| {
            let matrix = SimilarityMatrix::build(black_box(&vectors));
            black_box(matrix)
        })
    });
}

fn bench_query(c: &mut Criterion) {
    let texts = synthetic_corpus(1000);
    let (model, vectors) = TfidfModel::fit_transform(&texts);

    c.bench_function("query_against_1000_docs", |b| {
        b.iter(|| {
            let query = model.transform(black_box("space detective revenge"));
            black_box(scores_against(&vectors, &query))
        })
    });
}

criterion_group!(benches, bench_fit_transform, bench_matrix_build, bench_query);
criterion_main!(benches);
