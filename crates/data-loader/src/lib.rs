//! # Data Loader Crate
//!
//! This crate handles loading and indexing the movie catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, MovieCatalog)
//! - **parser**: Parse the catalog CSV into Rust structs
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::parser::load_catalog;
//! use std::path::Path;
//!
//! // Load the catalog
//! let catalog = load_catalog(Path::new("data/movies.csv"))?;
//!
//! // Query it
//! let index = catalog.index_of_title("Arrival").unwrap();
//! let movie = catalog.get(index).unwrap();
//!
//! println!("{} ({}) - {:?}", movie.title, movie.year, movie.genres);
//! ```
//!
//! The catalog is the single source of truth for the rest of the system:
//! movie ids are positions in it, and the similarity engine is fitted on
//! its composite texts in catalog order.

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::load_catalog;
pub use types::{Movie, MovieCatalog, MovieId};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = MovieCatalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut catalog = MovieCatalog::new();

        catalog.insert_movie(Movie {
            id: 0,
            title: "Arrival".to_string(),
            year: 2016,
            genres: vec!["Drama".to_string(), "Sci-Fi".to_string()],
            overview: "A linguist decodes an alien language".to_string(),
        });

        let retrieved = catalog.get(0).unwrap();
        assert_eq!(retrieved.id, 0);
        assert_eq!(retrieved.year, 2016);
        assert_eq!(retrieved.genres.len(), 2);

        assert_eq!(catalog.index_of_title("arrival"), Some(0));
        assert_eq!(catalog.index_of_id(0), Some(0));
        assert_eq!(catalog.index_of_id(1), None);
    }

    #[test]
    fn test_composite_texts_in_corpus_order() {
        let catalog = MovieCatalog::from_movies(vec![
            Movie {
                id: 0,
                title: "A".to_string(),
                year: 2000,
                genres: vec!["Drama".to_string()],
                overview: "first".to_string(),
            },
            Movie {
                id: 1,
                title: "B".to_string(),
                year: 2001,
                genres: vec![],
                overview: "second".to_string(),
            },
        ]);

        let texts = catalog.composite_texts();
        assert_eq!(texts, vec!["first Drama", "second"]);
    }
}
