//! Cosine similarity between sparse term vectors.

use std::collections::HashSet;

use crate::scoring::tfidf::TermVector;

/// Cosine similarity between two sparse vectors, over the union of their
/// terms.
///
/// Returns 0.0 when either vector is empty or has zero magnitude, so
/// documents with nothing to say never match anything. With non-negative
/// weights the result lands in [0, 1]; it is clamped to that range to keep
/// floating-point drift out of downstream scores.
pub fn cosine_similarity(first: &TermVector, second: &TermVector) -> f64 {
    if first.is_empty() || second.is_empty() {
        return 0.0;
    }

    let terms: HashSet<&str> = first.terms().chain(second.terms()).collect();

    let mut dot_product = 0.0;
    let mut magnitude_first = 0.0;
    let mut magnitude_second = 0.0;

    for term in terms {
        let weight_first = first.weight(term);
        let weight_second = second.weight(term);
        dot_product += weight_first * weight_second;
        magnitude_first += weight_first * weight_first;
        magnitude_second += weight_second * weight_second;
    }

    if magnitude_first == 0.0 || magnitude_second == 0.0 {
        return 0.0;
    }

    (dot_product / (magnitude_first.sqrt() * magnitude_second.sqrt())).clamp(0.0, 1.0)
}
