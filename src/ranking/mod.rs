//! Term relevance ranking for a single page.
//!
//! Terms are weighted by TF-IDF over a corpus made of the page alone. With one
//! document every term has the same (smoothed) idf of 1, so the ranking is in
//! effect an L2-normalized term frequency.

pub mod stop_words;
pub mod tokenizer;

use crate::document::Document;
use crate::results::TermScore;
use std::collections::HashMap;

/// Number of terms kept by default
pub const DEFAULT_TOP_TERMS: usize = 10;

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`
pub fn smooth_idf(documents: usize, document_frequency: usize) -> f64 {
    ((1 + documents) as f64 / (1 + document_frequency) as f64).ln() + 1.0
}

/// Ranks the terms of the page's visible text
pub fn rank_document(document: &Document, limit: usize) -> Vec<TermScore> {
    rank_terms(&document.visible_text(), limit)
}

/// Ranks the terms of `text`, best first, keeping at most `limit`
///
/// Equal scores keep the order in which the terms first appear.
pub fn rank_terms(text: &str, limit: usize) -> Vec<TermScore> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokenizer::tokenize(text) {
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    if counts.is_empty() {
        return Vec::new();
    }

    // Every term occurs in the only document
    let idf = smooth_idf(1, 1);
    let weights: Vec<f64> = counts.iter().map(|(_, tf)| *tf as f64 * idf).collect();
    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();

    let mut scores: Vec<TermScore> = counts
        .into_iter()
        .zip(weights)
        .map(|((term, _), weight)| TermScore::new(term, weight / norm))
        .collect();

    // sort_by is stable
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(limit);

    ::log::debug!("Ranked {} terms", scores.len());
    scores
}
