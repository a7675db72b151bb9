//! Filter to drop the reference movie from its own recommendations.
//!
//! "Movies like X" must never answer with X itself; X scores 1.0 against
//! itself and would otherwise always win the ranking.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieCatalog;
use similarity::Scored;

/// Drops the candidate at one catalog position.
pub struct ExcludeMovieFilter {
    index: usize,
}

impl ExcludeMovieFilter {
    /// Create a new ExcludeMovieFilter.
    ///
    /// # Arguments
    /// * `index` - Catalog position of the reference movie
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl Filter for ExcludeMovieFilter {
    fn name(&self) -> &str {
        "ExcludeMovieFilter"
    }

    fn apply(&self, candidates: Vec<Scored>, _catalog: &MovieCatalog) -> Result<Vec<Scored>> {
        let filtered = candidates
            .into_iter()
            .filter(|candidate| candidate.index != self.index)
            .collect();
        Ok(filtered)
    }
}
