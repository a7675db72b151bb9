//! Pipeline for filtering and ranking scored movie candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - rank() for the final sort-and-truncate step
//!
//! ## Architecture
//! The pipeline processes scored candidates in stages:
//! 1. Filters narrow the candidate set (reference movie, genre tags,
//!    year range) without touching scores or order
//! 2. rank() sorts the survivors by score and truncates to top-K
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, rank};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(ExcludeMovieFilter::new(reference_index))
//!     .add_filter(GenreFilter::new(["Drama"]))
//!     .add_filter(YearRangeFilter::new(1990, 2010));
//!
//! let filtered = pipeline.apply(candidates, &catalog)?;
//! let top = rank(filtered, 10);
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod ranker;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use ranker::rank;
pub use traits::Filter;
