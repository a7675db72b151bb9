//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieCatalog;
use similarity::Scored;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExcludeMovieFilter::new(reference_index))
///     .add_filter(GenreFilter::new(["Drama", "Sci-Fi"]))
///     .add_filter(YearRangeFilter::new(1990, 2010));
///
/// let filtered = pipeline.apply(candidates, &catalog)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each filter narrows the set; the output is always a subset of the
    /// input, in the input's order.
    ///
    /// # Arguments
    /// * `candidates` - The scored candidates to filter
    /// * `catalog` - Catalog for metadata lookups
    ///
    /// # Returns
    /// * `Ok(Vec<Scored>)` - The candidates surviving all filters
    /// * `Err` - If any filter fails
    pub fn apply(&self, candidates: Vec<Scored>, catalog: &MovieCatalog) -> Result<Vec<Scored>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, catalog)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
