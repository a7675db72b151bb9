//! The fitted tf-idf model: frozen vocabulary plus idf table.
//!
//! Fitting scans the corpus once to collect document frequencies, assigns
//! column indices in sorted term order, and precomputes smoothed idf
//! weights. After that the model is frozen: transforming new text never
//! grows the vocabulary, and unseen terms simply contribute nothing.

use crate::text;
use crate::vector::SparseVector;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// A frozen term-weighting model fitted on one corpus.
#[derive(Debug, Clone, Default)]
pub struct TfidfModel {
    /// term -> dense column index
    vocabulary: HashMap<String, u32>,
    /// smoothed idf weight per column
    idf: Vec<f32>,
    /// number of documents the model was fitted on
    n_docs: usize,
}

impl TfidfModel {
    /// Fit a model on the corpus texts, one string per document.
    ///
    /// Column indices are assigned in sorted term order, so two fits over
    /// identical corpora produce identical vocabularies and idf tables.
    /// An all-empty corpus yields an empty vocabulary, which is a valid
    /// state: every vector it produces is the zero vector.
    pub fn fit(texts: &[String]) -> Self {
        let n_docs = texts.len();

        // Document frequency: number of documents containing each term
        let mut doc_freq: HashMap<String, u32> = HashMap::new();
        for text in texts {
            let unique: HashSet<String> = text::terms(text).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut sorted_terms: Vec<(String, u32)> = doc_freq.into_iter().collect();
        sorted_terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = HashMap::with_capacity(sorted_terms.len());
        let mut idf = Vec::with_capacity(sorted_terms.len());
        for (index, (term, df)) in sorted_terms.into_iter().enumerate() {
            vocabulary.insert(term, index as u32);
            idf.push(smoothed_idf(n_docs, df));
        }

        debug!(
            documents = n_docs,
            vocabulary = vocabulary.len(),
            "fitted tf-idf model"
        );
        Self {
            vocabulary,
            idf,
            n_docs,
        }
    }

    /// Fit a model and transform every corpus document in one pass.
    pub fn fit_transform(texts: &[String]) -> (Self, Vec<SparseVector>) {
        let model = Self::fit(texts);
        let vectors = texts.par_iter().map(|t| model.transform(t)).collect();
        (model, vectors)
    }

    /// Project text into the model's term space: term counts weighted by
    /// the corpus idf, L2-normalized.
    ///
    /// The vocabulary is frozen; out-of-vocabulary terms are silently
    /// dropped. Text with no in-vocabulary terms maps to the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<u32, f32> = HashMap::new();
        for term in text::terms(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(index, count)| (index, count * self.idf[index as usize]))
            .collect();
        let mut vector = SparseVector::from_entries(entries);
        vector.normalize();
        vector
    }

    /// Number of terms in the frozen vocabulary
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the model was fitted on
    pub fn n_docs(&self) -> usize {
        self.n_docs
    }
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
///
/// The +1 smoothing keeps the weight finite for df == n and strictly
/// positive everywhere, so stored entries are never zero.
fn smoothed_idf(n_docs: usize, df: u32) -> f32 {
    ((1.0 + n_docs as f32) / (1.0 + df as f32)).ln() + 1.0
}
