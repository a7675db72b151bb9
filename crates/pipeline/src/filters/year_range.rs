//! Filter for release-year ranges.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieCatalog;
use similarity::Scored;

/// Keeps only candidates released within [from, to], inclusive.
///
/// An inverted range (from > to) matches no year, so it yields an empty
/// result rather than an error.
pub struct YearRangeFilter {
    from: u16,
    to: u16,
}

impl YearRangeFilter {
    /// Create a new YearRangeFilter.
    ///
    /// # Arguments
    /// * `from` - Earliest year to keep, inclusive
    /// * `to` - Latest year to keep, inclusive
    pub fn new(from: u16, to: u16) -> Self {
        Self { from, to }
    }
}

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn apply(&self, candidates: Vec<Scored>, catalog: &MovieCatalog) -> Result<Vec<Scored>> {
        let filtered = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = catalog.get(candidate.index) {
                    movie.year >= self.from && movie.year <= self.to
                } else {
                    false
                }
            })
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    fn create_test_catalog() -> MovieCatalog {
        let movie = |id, year| Movie {
            id,
            title: format!("Movie {id}"),
            year,
            genres: vec![],
            overview: String::new(),
        };
        MovieCatalog::from_movies(vec![movie(0, 1980), movie(1, 2000), movie(2, 2020)])
    }

    fn candidates() -> Vec<Scored> {
        vec![
            Scored { index: 0, score: 0.9 },
            Scored { index: 1, score: 0.8 },
            Scored { index: 2, score: 0.7 },
        ]
    }

    #[test]
    fn test_inclusive_bounds() {
        let catalog = create_test_catalog();
        let filter = YearRangeFilter::new(1980, 2000);
        let filtered = filter.apply(candidates(), &catalog).unwrap();

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|c| c.index != 2));
    }

    #[test]
    fn test_single_year_range() {
        let catalog = create_test_catalog();
        let filter = YearRangeFilter::new(2000, 2000);
        let filtered = filter.apply(candidates(), &catalog).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].index, 1);
    }

    #[test]
    fn test_inverted_range_is_empty_not_error() {
        let catalog = create_test_catalog();
        let filter = YearRangeFilter::new(2010, 1990);
        let filtered = filter.apply(candidates(), &catalog).unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_no_matching_year_is_empty() {
        let catalog = create_test_catalog();
        let filter = YearRangeFilter::new(2005, 2005);
        let filtered = filter.apply(candidates(), &catalog).unwrap();
        assert!(filtered.is_empty());
    }
}
