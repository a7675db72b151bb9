//! The built model snapshot: vocabulary, vectors, and similarity matrix
//! as one immutable unit.
//!
//! The three structures are only consistent with each other when they come
//! from the same corpus pass, so they are built together, versioned by the
//! catalog's content hash, and never mutated afterward. Concurrent
//! requests share one snapshot behind an `Arc` without coordination.

use data_loader::MovieCatalog;
use similarity::{Scored, SimilarityMatrix, SparseVector, TfidfModel, scores_against};
use std::time::Instant;
use tracing::info;

/// Largest catalog for which the full pairwise matrix is materialized.
///
/// The matrix costs 4 * N^2 bytes and is the dominant memory cost of the
/// engine. Above this size, by-movie queries compute their similarity row
/// on demand instead; results are identical, lookups just pay one row of
/// dot products per request.
pub const DEFAULT_MATRIX_CEILING: usize = 20_000;

/// One immutable build of the vector-space model over one catalog version.
#[derive(Debug)]
pub struct ModelSnapshot {
    /// Content hash of the catalog this snapshot was built from
    version: u64,
    model: TfidfModel,
    /// One unit-or-zero vector per movie, in catalog order
    vectors: Vec<SparseVector>,
    /// Full pairwise matrix, when the catalog fits under the ceiling
    matrix: Option<SimilarityMatrix>,
}

impl ModelSnapshot {
    /// Fit the model, vectorize every movie, and (size permitting)
    /// materialize the pairwise matrix, in one pass over the catalog.
    pub fn build(catalog: &MovieCatalog, matrix_ceiling: usize) -> Self {
        let start = Instant::now();
        let texts = catalog.composite_texts();
        let (model, vectors) = TfidfModel::fit_transform(&texts);

        let matrix = if vectors.len() <= matrix_ceiling {
            Some(SimilarityMatrix::build(&vectors))
        } else {
            info!(
                movies = vectors.len(),
                ceiling = matrix_ceiling,
                "catalog over matrix ceiling, pairwise rows computed on demand"
            );
            None
        };

        let snapshot = Self {
            version: catalog.content_hash(),
            model,
            vectors,
            matrix,
        };
        info!(
            movies = snapshot.vectors.len(),
            vocabulary = snapshot.model.vocabulary_size(),
            matrix = snapshot.matrix.is_some(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built model snapshot"
        );
        snapshot
    }

    /// Content hash of the catalog this snapshot was built from
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of movies in the snapshot
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Number of terms in the frozen vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    /// Whether the full pairwise matrix was materialized
    pub fn has_matrix(&self) -> bool {
        self.matrix.is_some()
    }

    /// Similarity of every movie to the movie at `index`, in catalog
    /// order. Reads the precomputed matrix row when present, otherwise
    /// computes the row on demand from the stored vectors.
    pub fn scores_for(&self, index: usize) -> Vec<Scored> {
        match &self.matrix {
            Some(matrix) => matrix.row_scored(index),
            None => scores_against(&self.vectors, &self.vectors[index]),
        }
    }

    /// Similarity of every movie to a free-text query, in catalog order.
    ///
    /// The query is projected through the frozen vocabulary with corpus
    /// idf weights. Empty or fully out-of-vocabulary text scores 0
    /// against everything.
    pub fn scores_for_text(&self, query: &str) -> Vec<Scored> {
        let query_vector = self.model.transform(query);
        scores_against(&self.vectors, &query_vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    fn test_catalog() -> MovieCatalog {
        let movie = |id, title: &str, overview: &str| Movie {
            id,
            title: title.to_string(),
            year: 2000,
            genres: vec!["Drama".to_string()],
            overview: overview.to_string(),
        };
        MovieCatalog::from_movies(vec![
            movie(0, "A", "a quiet story"),
            movie(1, "B", "a quiet story"),
            movie(2, "C", "explosions and chases"),
        ])
    }

    #[test]
    fn test_build_populates_all_parts() {
        let catalog = test_catalog();
        let snapshot = ModelSnapshot::build(&catalog, DEFAULT_MATRIX_CEILING);

        assert_eq!(snapshot.len(), 3);
        assert!(snapshot.has_matrix());
        assert!(snapshot.vocabulary_size() > 0);
        assert_eq!(snapshot.version(), catalog.content_hash());
    }

    #[test]
    fn test_scores_agree_with_and_without_matrix() {
        let catalog = test_catalog();
        let with_matrix = ModelSnapshot::build(&catalog, DEFAULT_MATRIX_CEILING);
        let without_matrix = ModelSnapshot::build(&catalog, 0);

        assert!(!without_matrix.has_matrix());
        for i in 0..catalog.len() {
            let a = with_matrix.scores_for(i);
            let b = without_matrix.scores_for(i);
            for (x, y) in a.iter().zip(&b) {
                assert_eq!(x.index, y.index);
                assert!((x.score - y.score).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_query_scoring() {
        let catalog = test_catalog();
        let snapshot = ModelSnapshot::build(&catalog, DEFAULT_MATRIX_CEILING);

        let scored = snapshot.scores_for_text("quiet story");
        assert!(scored[0].score > scored[2].score);

        let blank = snapshot.scores_for_text("");
        assert!(blank.iter().all(|s| s.score == 0.0));
    }
}
