//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures used throughout the
//! system: the `Movie` record and the `MovieCatalog`, an ordered in-memory
//! store with secondary indices for title and genre lookups.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie within one catalog load.
///
/// Ids are assigned sequentially in file order, so `id` doubles as the
/// movie's position in the catalog. A reload may assign different ids.
pub type MovieId = u32;

// =============================================================================
// Movie
// =============================================================================

/// Represents one movie in the catalog.
///
/// Immutable once loaded; the catalog is reloaded wholesale, never patched
/// in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Release year. The loader rejects records without a parsable year.
    pub year: u16,
    /// Genre tags in file order, original casing preserved for display.
    /// Matching elsewhere is case-insensitive.
    pub genres: Vec<String>,
    /// Free-text plot overview (may be empty)
    pub overview: String,
}

impl Movie {
    /// The text the vector-space model is built from: overview plus genre
    /// tags, space-joined. Pure function of the movie, recomputed per build.
    pub fn composite_text(&self) -> String {
        if self.genres.is_empty() {
            return self.overview.clone();
        }
        let mut text = String::with_capacity(self.overview.len() + 16);
        text.push_str(&self.overview);
        for genre in &self.genres {
            text.push(' ');
            text.push_str(genre);
        }
        text
    }
}

// =============================================================================
// MovieCatalog - The In-Memory Corpus
// =============================================================================

/// Ordered, immutable-after-load movie corpus with lookup indices.
///
/// Primary storage is a `Vec<Movie>` in file order; the similarity engine
/// addresses movies by position, so insertion order is load-bearing.
/// Secondary indices provide title lookup and the distinct genre set.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,

    /// Lowercased title -> first catalog index with that title.
    ///
    /// Titles are not unique; lookups resolve to the first occurrence in
    /// file order. Use `index_of_id` for an unambiguous lookup.
    title_index: HashMap<String, usize>,
}

impl MovieCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            title_index: HashMap::new(),
        }
    }

    /// Build a catalog from movies already in corpus order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let mut catalog = Self::new();
        for movie in movies {
            catalog.insert_movie(movie);
        }
        catalog
    }

    /// Append a movie to the catalog, keeping the title index current.
    ///
    /// The first movie with a given (case-insensitive) title wins the
    /// title-index slot; later duplicates remain reachable by id.
    pub fn insert_movie(&mut self, movie: Movie) {
        let position = self.movies.len();
        self.title_index
            .entry(movie.title.to_lowercase())
            .or_insert(position);
        self.movies.push(movie);
    }

    // Getters - These return references (&T) not owned values (T)

    /// Get a movie by catalog position
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// All movies in corpus order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Resolve a title to a catalog index (case-insensitive).
    ///
    /// Returns the first matching movie in file order when the title is
    /// duplicated; `None` when no movie carries the title.
    pub fn index_of_title(&self, title: &str) -> Option<usize> {
        self.title_index.get(&title.to_lowercase()).copied()
    }

    /// Resolve a movie id to a catalog index.
    ///
    /// Ids are positional, so this is a bounds check rather than a search.
    pub fn index_of_id(&self, id: MovieId) -> Option<usize> {
        let index = id as usize;
        (index < self.movies.len()).then_some(index)
    }

    /// Every distinct genre tag in the catalog, sorted, with the casing of
    /// its first occurrence.
    pub fn distinct_genres(&self) -> Vec<String> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for movie in &self.movies {
            for genre in &movie.genres {
                seen.entry(genre.to_lowercase()).or_insert(genre);
            }
        }
        let sorted: BTreeSet<&str> = seen.values().copied().collect();
        sorted.into_iter().map(String::from).collect()
    }

    /// The composite text of every movie, in corpus order. This is the
    /// input the vector-space model is fitted on.
    pub fn composite_texts(&self) -> Vec<String> {
        self.movies.iter().map(Movie::composite_text).collect()
    }

    /// Stable content hash of the whole catalog.
    ///
    /// Two catalogs with identical movies in identical order hash equal;
    /// used as the version key for built model snapshots.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for movie in &self.movies {
            movie.title.hash(&mut hasher);
            movie.year.hash(&mut hasher);
            movie.genres.hash(&mut hasher);
            movie.overview.hash(&mut hasher);
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, title: &str, year: u16, genres: &[&str], overview: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            year,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            overview: overview.to_string(),
        }
    }

    #[test]
    fn test_composite_text_joins_overview_and_genres() {
        let m = movie(0, "Arrival", 2016, &["Drama", "Sci-Fi"], "a linguist decodes");
        assert_eq!(m.composite_text(), "a linguist decodes Drama Sci-Fi");
    }

    #[test]
    fn test_composite_text_empty_fields() {
        let m = movie(0, "Untitled", 2000, &[], "");
        assert_eq!(m.composite_text(), "");

        let genres_only = movie(1, "Tagged", 2000, &["Horror"], "");
        assert_eq!(genres_only.composite_text(), " Horror");
    }

    #[test]
    fn test_title_lookup_first_match_wins() {
        let mut catalog = MovieCatalog::new();
        catalog.insert_movie(movie(0, "Heat", 1995, &["Crime"], "a heist"));
        catalog.insert_movie(movie(1, "Heat", 2013, &["Comedy"], "a remake"));

        // Duplicate titles resolve to the earlier record
        assert_eq!(catalog.index_of_title("Heat"), Some(0));
        assert_eq!(catalog.index_of_title("heat"), Some(0));

        // Both stay reachable by id
        assert_eq!(catalog.index_of_id(1), Some(1));
    }

    #[test]
    fn test_empty_queries() {
        let catalog = MovieCatalog::new();

        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
        assert!(catalog.index_of_title("anything").is_none());
        assert!(catalog.index_of_id(0).is_none());
        assert!(catalog.distinct_genres().is_empty());
    }

    #[test]
    fn test_distinct_genres_dedupes_case_insensitively() {
        let mut catalog = MovieCatalog::new();
        catalog.insert_movie(movie(0, "A", 2000, &["Drama", "Action"], ""));
        catalog.insert_movie(movie(1, "B", 2001, &["drama", "Thriller"], ""));

        let genres = catalog.distinct_genres();
        assert_eq!(genres.len(), 3);
        assert!(genres.iter().any(|g| g.eq_ignore_ascii_case("drama")));
    }

    #[test]
    fn test_content_hash_tracks_content() {
        let a = MovieCatalog::from_movies(vec![movie(0, "A", 2000, &["Drama"], "x")]);
        let b = MovieCatalog::from_movies(vec![movie(0, "A", 2000, &["Drama"], "x")]);
        let c = MovieCatalog::from_movies(vec![movie(0, "A", 2001, &["Drama"], "x")]);

        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a.content_hash(), c.content_hash());
    }
}
