//! # Similarity Crate
//!
//! The vector-space core of the recommendation engine.
//!
//! ## Components
//!
//! - **text**: tokenizer — lowercase, alphanumeric splitting, English
//!   stop-word removal, unigram + bigram term generation
//! - **model**: `TfidfModel` — frozen vocabulary and smoothed idf table
//!   fitted once per corpus, with `transform` for projecting arbitrary
//!   text through it
//! - **vector**: `SparseVector` — index-sorted sparse storage, merge-join
//!   dot product, guarded L2 normalization
//! - **matrix**: `SimilarityMatrix` — full pairwise cosine matrix built in
//!   parallel, plus `scores_against` for query-time scoring
//!
//! ## Example Usage
//!
//! ```ignore
//! use similarity::{SimilarityMatrix, TfidfModel, scores_against};
//!
//! let (model, vectors) = TfidfModel::fit_transform(&texts);
//! let matrix = SimilarityMatrix::build(&vectors);
//!
//! // Movies most like movie 3, by precomputed row
//! let scored = matrix.row_scored(3);
//!
//! // Movies matching a free-text query
//! let query = model.transform("space exploration drama");
//! let scored = scores_against(&vectors, &query);
//! ```
//!
//! Everything here is deterministic given identical input texts: the
//! vocabulary is assigned in sorted term order and every score is computed
//! with the same operation sequence, so two builds of the same corpus
//! agree bit for bit.

// Public modules
pub mod matrix;
pub mod model;
pub mod text;
pub mod vector;

// Re-export commonly used types
pub use matrix::{Scored, SimilarityMatrix, scores_against};
pub use model::TfidfModel;
pub use vector::{SparseVector, cosine};
