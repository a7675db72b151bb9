//! Sparse weighted vectors.
//!
//! Document vectors over a movie-catalog vocabulary are overwhelmingly
//! sparse, so they are stored as index-sorted `(column, weight)` pairs.
//! Dot products run as a merge join over the two sorted entry lists.

use std::cmp::Ordering;

/// A sparse vector with entries sorted by column index.
///
/// Weights are strictly positive by construction (a tf-idf weight is only
/// stored for terms that occur), so an empty entry list is exactly the
/// zero vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    /// Build from unsorted entries.
    pub fn from_entries(mut entries: Vec<(u32, f32)>) -> Self {
        entries.sort_unstable_by_key(|&(index, _)| index);
        Self { entries }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of nonzero components
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Dot product via merge join over the sorted entries.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let a = &self.entries;
        let b = &other.entries;
        let mut sum = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Euclidean norm
    pub fn norm(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }

    /// Scale to unit length. The zero vector stays zero; the norm guard
    /// here is what keeps NaN out of every downstream similarity.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}

/// Cosine similarity of two unit-or-zero vectors.
///
/// Inputs are already L2-normalized (or zero), so the cosine is the dot
/// product; the result is clamped into [0, 1] to absorb float drift.
/// Either vector being zero yields 0, never NaN.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f32 {
    a.dot(b).clamp(0.0, 1.0)
}
