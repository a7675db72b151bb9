//! Filter to keep only movies carrying one of the requested genre tags.
//!
//! Matching is exact-tag set intersection, case-insensitive. Substring
//! matching over a joined genre string would also admit near-miss tags
//! ("Drama" matching a hypothetical "Dramatic"), so tags are compared
//! whole.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieCatalog;
use similarity::Scored;
use std::collections::HashSet;

/// Keeps only candidates whose genre tags intersect the allowed set.
pub struct GenreFilter {
    /// Allowed tags, lowercased at construction
    allowed: HashSet<String>,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `allowed` - Genre tags to keep, any casing
    ///
    /// An empty set admits nothing; callers that mean "no genre filter"
    /// should not install the filter at all.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: allowed
                .into_iter()
                .map(|g| g.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<Scored>, catalog: &MovieCatalog) -> Result<Vec<Scored>> {
        let filtered = candidates
            .into_iter()
            .filter(|candidate| {
                if let Some(movie) = catalog.get(candidate.index) {
                    movie
                        .genres
                        .iter()
                        .any(|genre| self.allowed.contains(&genre.to_lowercase()))
                } else {
                    false // Exclude if movie not found
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
        MovieCatalog::from_movies(vec![
            Movie {
                id: 0,
                title: "Action Movie".to_string(),
                year: 2000,
                genres: vec!["Action".to_string(), "Adventure".to_string()],
                overview: String::new(),
            },
            Movie {
                id: 1,
                title: "Drama Movie".to_string(),
                year: 1995,
                genres: vec!["Drama".to_string()],
                overview: String::new(),
            },
            Movie {
                id: 2,
                title: "Dramatic Movie".to_string(),
                year: 2005,
                genres: vec!["Dramatic".to_string()],
                overview: String::new(),
            },
        ])
    }

    fn candidates() -> Vec<Scored> {
        vec![
            Scored { index: 0, score: 0.9 },
            Scored { index: 1, score: 0.8 },
            Scored { index: 2, score: 0.7 },
        ]
    }

    #[test]
    fn test_keeps_intersecting_tags_case_insensitively() {
        let catalog = create_test_catalog();
        let filter = GenreFilter::new(["drama", "ADVENTURE"]);
        let filtered = filter.apply(candidates(), &catalog).unwrap();

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().any(|c| c.index == 0));
        assert!(filtered.iter().any(|c| c.index == 1));
    }

    #[test]
    fn test_whole_tag_match_only() {
        let catalog = create_test_catalog();

        // "Drama" must not match the "Dramatic" tag
        let filter = GenreFilter::new(["Drama"]);
        let filtered = filter.apply(candidates(), &catalog).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].index, 1);
    }

    #[test]
    fn test_empty_allowed_set_admits_nothing() {
        let catalog = create_test_catalog();
        let filter = GenreFilter::new(Vec::<String>::new());
        let filtered = filter.apply(candidates(), &catalog).unwrap();
        assert!(filtered.is_empty());
    }
}
