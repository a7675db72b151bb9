//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to scored candidate sets.

use anyhow::Result;
use data_loader::MovieCatalog;
use similarity::Scored;

/// Core trait for filtering scored candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Scored> and return a filtered Vec
/// - Filters only ever narrow the set; they never rescore or reorder
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of scored candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `catalog` - Catalog for movie metadata lookups
    ///
    /// # Returns
    /// * `Ok(Vec<Scored>)` - The filtered candidates
    /// * `Err` - If filtering fails
    fn apply(&self, candidates: Vec<Scored>, catalog: &MovieCatalog) -> Result<Vec<Scored>>;
}
