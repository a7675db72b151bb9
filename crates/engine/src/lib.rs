//! # Engine Crate
//!
//! The public face of the recommendation system: owns the catalog, builds
//! the vector-space model exactly once per catalog version, and answers
//! the two request modes the host exposes.
//!
//! ## Components
//!
//! - **snapshot**: `ModelSnapshot` — vocabulary + vectors + pairwise
//!   matrix, built as one immutable, versioned unit
//! - **recommender**: `Recommender` — request orchestration (by-title,
//!   by-id, free-text), filter assembly, ranking
//! - **error**: `EngineError` — typed outcomes for user-input problems
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::load_catalog;
//! use engine::{Recommender, RequestOptions};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(load_catalog(Path::new("data/movies.csv"))?);
//! let recommender = Recommender::new(catalog)?;
//! recommender.warm(); // optional eager build
//!
//! let options = RequestOptions { top_k: 8, ..Default::default() };
//! for rec in recommender.recommend_by_title("Arrival", &options)? {
//!     println!("{} ({})  {:.3}", rec.title, rec.year, rec.similarity);
//! }
//! ```

pub mod error;
pub mod recommender;
pub mod snapshot;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use recommender::{Recommendation, Recommender, RequestOptions};
pub use snapshot::{DEFAULT_MATRIX_CEILING, ModelSnapshot};
