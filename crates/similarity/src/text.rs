//! Tokenization for the vector-space model.
//!
//! Text is lowercased, split on non-alphanumeric boundaries, stripped of
//! English stop words and single-character fragments, then expanded into
//! unigrams plus adjacent-pair bigrams. The same function runs at fit time
//! and at query time so corpus and query land in the same term space.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English words that carry no signal for content similarity.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "is", "it", "as", "be", "this", "that", "from",
    "was", "are", "were", "been", "has", "have", "had", "not", "no", "do",
    "does", "did", "will", "would", "can", "could", "should", "shall",
    "may", "might", "must", "i", "we", "you", "he", "she", "they", "my",
    "your", "how", "what", "why", "when", "where", "which", "who", "whom",
    "its", "their", "our", "his", "her", "them", "us", "me", "him", "than",
    "then", "so", "if", "about", "up", "out", "just", "also", "more",
    "most", "some", "any", "all", "each", "every", "into", "onto", "over",
    "under", "after", "before", "between", "through", "during", "against",
    "very", "too", "other", "such", "only", "same", "own", "both", "few",
    "being", "here", "there", "these", "those", "while", "because",
    "until", "again", "further", "once", "down", "off", "above", "below",
    "itself", "himself", "herself", "themselves", "ourselves", "myself",
    "yourself", "am", "doing", "having", "now",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Split text into kept tokens: lowercased alphanumeric words of two or
/// more characters, stop words removed.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|t| !STOP_WORD_SET.contains(t.as_str()))
        .collect()
}

/// Expand text into the terms the model indexes: every kept token, plus
/// every adjacent pair joined by a space.
///
/// Bigrams form over the kept tokens, so "a quiet story" yields
/// ["quiet", "story", "quiet story"].
pub fn terms(text: &str) -> Vec<String> {
    let tokens = tokenize(text);
    let mut terms = Vec::with_capacity(tokens.len() * 2);
    terms.extend(tokens.iter().cloned());
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}
