//! # Recommendation Orchestrator
//!
//! This module coordinates a recommendation request end to end:
//! 1. Resolve the reference movie (by title or id) or project the query
//!    text through the frozen model
//! 2. Score every catalog movie (precomputed matrix row, or on demand)
//! 3. Apply filters (exclude reference, genre tags, year range)
//! 4. Rank by similarity and truncate to top-K
//! 5. Map surviving catalog positions to presentation rows
//!
//! The heavy state lives in a `ModelSnapshot` built at most once per
//! catalog: the first request (or an explicit `warm()`) runs the build
//! inside a `OnceLock`, so concurrent first requests block on the one
//! in-flight build and then share its result. Everything after the build
//! is read-only.

use crate::error::{EngineError, Result};
use crate::snapshot::{DEFAULT_MATRIX_CEILING, ModelSnapshot};
use data_loader::{MovieCatalog, MovieId};
use pipeline::filters::{ExcludeMovieFilter, GenreFilter, YearRangeFilter};
use pipeline::{FilterPipeline, rank};
use serde::Serialize;
use similarity::Scored;
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Knobs shared by every request mode.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Maximum number of rows to return; 0 means none
    pub top_k: usize,
    /// Keep only movies carrying at least one of these tags
    /// (case-insensitive exact-tag match). `None` disables the filter.
    pub allowed_genres: Option<HashSet<String>>,
    /// Keep only movies with `from <= year <= to`, inclusive. An
    /// inverted range matches nothing. `None` disables the filter.
    pub year_range: Option<(u16, u16)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            top_k: 10,
            allowed_genres: None,
            year_range: None,
        }
    }
}

/// Final recommendation row returned to the host
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub year: u16,
    pub genres: Vec<String>,
    /// Cosine similarity to the reference movie or query, in [0, 1]
    pub similarity: f32,
}

/// Main orchestrator owning the catalog and the lazily-built snapshot
#[derive(Debug)]
pub struct Recommender {
    catalog: Arc<MovieCatalog>,
    snapshot: OnceLock<Arc<ModelSnapshot>>,
    matrix_ceiling: usize,
}

impl Recommender {
    /// Create a recommender over a loaded catalog.
    ///
    /// The model is not built yet; it is built once, by whichever request
    /// arrives first (or by `warm()`). An empty catalog is rejected here
    /// so every later request can assume at least one movie exists.
    pub fn new(catalog: Arc<MovieCatalog>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            snapshot: OnceLock::new(),
            matrix_ceiling: DEFAULT_MATRIX_CEILING,
        })
    }

    /// Override the catalog size above which the pairwise matrix is not
    /// materialized (see `DEFAULT_MATRIX_CEILING`).
    pub fn with_matrix_ceiling(mut self, ceiling: usize) -> Self {
        self.matrix_ceiling = ceiling;
        self
    }

    /// The catalog this recommender serves
    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    /// The built snapshot, building it on first use.
    ///
    /// `OnceLock` guarantees at most one build per recommender: racing
    /// callers block until the winner's build completes, then all share
    /// the same `Arc`.
    pub fn snapshot(&self) -> &Arc<ModelSnapshot> {
        self.snapshot.get_or_init(|| {
            info!(version = self.catalog.content_hash(), "building model snapshot");
            Arc::new(ModelSnapshot::build(&self.catalog, self.matrix_ceiling))
        })
    }

    /// Build the snapshot eagerly, e.g. at startup, instead of on the
    /// first request.
    pub fn warm(&self) {
        let _ = self.snapshot();
    }

    /// Recommend movies similar to the one carrying `title`.
    ///
    /// Titles are not unique; the first matching movie in catalog order
    /// is used (`recommend_by_id` is the unambiguous alternative). The
    /// reference movie itself is never part of the result.
    pub fn recommend_by_title(
        &self,
        title: &str,
        options: &RequestOptions,
    ) -> Result<Vec<Recommendation>> {
        let index = self
            .catalog
            .index_of_title(title)
            .ok_or_else(|| EngineError::UnknownTitle {
                title: title.to_string(),
            })?;
        self.recommend_for_index(index, options)
    }

    /// Recommend movies similar to the one with the given id.
    pub fn recommend_by_id(
        &self,
        id: MovieId,
        options: &RequestOptions,
    ) -> Result<Vec<Recommendation>> {
        let index = self
            .catalog
            .index_of_id(id)
            .ok_or(EngineError::UnknownMovie { id })?;
        self.recommend_for_index(index, options)
    }

    /// Rank the whole catalog against a free-text query.
    ///
    /// An empty or entirely out-of-vocabulary query is not an error: all
    /// scores are 0 and the result is the first `top_k` movies in catalog
    /// order (stable tie-break).
    pub fn search(&self, query: &str, options: &RequestOptions) -> Result<Vec<Recommendation>> {
        let scored = self.snapshot().scores_for_text(query);
        self.filter_and_rank(scored, options, None)
    }

    fn recommend_for_index(
        &self,
        index: usize,
        options: &RequestOptions,
    ) -> Result<Vec<Recommendation>> {
        let scored = self.snapshot().scores_for(index);
        self.filter_and_rank(scored, options, Some(index))
    }

    /// Shared tail of every request: filter, rank, truncate, present.
    fn filter_and_rank(
        &self,
        scored: Vec<Scored>,
        options: &RequestOptions,
        exclude: Option<usize>,
    ) -> Result<Vec<Recommendation>> {
        let mut pipeline = FilterPipeline::new();
        if let Some(index) = exclude {
            pipeline = pipeline.add_filter(ExcludeMovieFilter::new(index));
        }
        if let Some(genres) = &options.allowed_genres {
            pipeline = pipeline.add_filter(GenreFilter::new(genres));
        }
        if let Some((from, to)) = options.year_range {
            pipeline = pipeline.add_filter(YearRangeFilter::new(from, to));
        }

        let filtered = pipeline.apply(scored, &self.catalog)?;
        let ranked = rank(filtered, options.top_k);
        Ok(self.to_recommendations(&ranked))
    }

    fn to_recommendations(&self, ranked: &[Scored]) -> Vec<Recommendation> {
        ranked
            .iter()
            .filter_map(|scored| {
                self.catalog.get(scored.index).map(|movie| Recommendation {
                    movie_id: movie.id,
                    title: movie.title.clone(),
                    year: movie.year,
                    genres: movie.genres.clone(),
                    similarity: scored.score,
                })
            })
            .collect()
    }
}
