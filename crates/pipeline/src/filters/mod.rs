//! Filter implementations for the recommendation pipeline.

pub mod exclude_movie;
pub mod genre;
pub mod year_range;

pub use exclude_movie::ExcludeMovieFilter;
pub use genre::GenreFilter;
pub use year_range::YearRangeFilter;
