//! Error types for the engine crate.
//!
//! User-input-shaped problems (unknown titles, unknown ids, an empty
//! catalog) surface as typed variants the host can render as a message.
//! Numerical edge cases — zero vectors, out-of-vocabulary queries — are
//! absorbed inside the similarity layer and never reach this enum.

use data_loader::MovieId;
use thiserror::Error;

/// Errors a recommendation request can surface
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requested reference title is not in the catalog.
    ///
    /// Distinct from an empty result: the caller asked about a movie the
    /// engine has never seen, which deserves a message, not a blank table.
    #[error("No movie titled '{title}' in the catalog")]
    UnknownTitle { title: String },

    /// The requested reference id is not in the catalog
    #[error("No movie with id {id} in the catalog")]
    UnknownMovie { id: MovieId },

    /// An engine was requested over a catalog with zero movies
    #[error("The movie catalog is empty")]
    EmptyCatalog,

    /// A filter stage failed
    #[error("Recommendation pipeline failed: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
