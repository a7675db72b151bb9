//! Pairwise similarity over the whole corpus.
//!
//! For small-to-medium catalogs the full N x N cosine matrix is cheap to
//! build once (rows in parallel) and makes every by-movie query a row
//! read. The matrix is the dominant memory cost of the system — 4 * N^2
//! bytes — so callers are expected to gate materialization behind a
//! catalog-size ceiling and fall back to `scores_against` above it.

use crate::vector::{SparseVector, cosine};
use rayon::prelude::*;
use tracing::debug;

/// One scored corpus item: catalog position plus similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub index: usize,
    pub score: f32,
}

/// Dense, symmetric cosine-similarity matrix, row-major.
///
/// Read-only after construction. Every value lies in [0, 1]; the diagonal
/// is pinned to exactly 1.0 for movies with a nonzero vector and 0.0 for
/// movies whose composite text vectorized to zero.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Build the full pairwise matrix from unit-or-zero document vectors.
    ///
    /// Rows are computed in parallel; cell (i, j) and cell (j, i) run the
    /// same merge join, so the result is exactly symmetric.
    pub fn build(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let data: Vec<f32> = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                let row: Vec<f32> = (0..n)
                    .map(|j| {
                        if i == j {
                            if vectors[i].is_zero() { 0.0 } else { 1.0 }
                        } else {
                            cosine(&vectors[i], &vectors[j])
                        }
                    })
                    .collect();
                row
            })
            .collect();

        debug!(items = n, "built similarity matrix");
        Self { n, data }
    }

    /// Number of items per side
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of items i and j
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.n + j]
    }

    /// All similarities of item i, in corpus order
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Row i as scored items, in corpus order (caller sorts)
    pub fn row_scored(&self, i: usize) -> Vec<Scored> {
        self.row(i)
            .iter()
            .enumerate()
            .map(|(index, &score)| Scored { index, score })
            .collect()
    }
}

/// Score a single vector against every corpus vector, in corpus order.
///
/// This is the query-time path, and also the pairwise fallback when the
/// catalog is too large to materialize the full matrix. A zero query
/// scores 0 against everything.
pub fn scores_against(vectors: &[SparseVector], query: &SparseVector) -> Vec<Scored> {
    vectors
        .par_iter()
        .enumerate()
        .map(|(index, v)| Scored {
            index,
            score: cosine(query, v),
        })
        .collect()
}
