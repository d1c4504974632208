//! TF-IDF weighting over sparse term vectors.
//!
//! Term frequency is the share of a document's tokens equal to the term.
//! Inverse document frequency uses the smoothed form
//! `ln((N + 1) / (df + 1)) + 1`, which stays positive and finite even for
//! terms the corpus has never seen, so unseen query terms degrade a score
//! instead of poisoning it.

use std::collections::HashMap;
use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::error::Result;
use crate::scoring::corpus::Corpus;

/// A sparse term-to-weight mapping. Terms absent from the map weigh zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: HashMap<String, f64>,
}

impl TermVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        TermVector::default()
    }

    /// Set the weight for a term.
    pub fn set_weight<S: Into<String>>(&mut self, term: S, weight: f64) {
        self.weights.insert(term.into(), weight);
    }

    /// The weight of `term`, zero when absent.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Iterate over the distinct terms in this vector.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(|term| term.as_str())
    }

    /// Number of terms with an explicit weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the vector has no weighted terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Euclidean magnitude of the vector.
    pub fn magnitude(&self) -> f64 {
        self.weights
            .values()
            .map(|weight| weight * weight)
            .sum::<f64>()
            .sqrt()
    }
}

/// Share of `tokens` equal to `term`. Zero for an empty document.
pub fn term_frequency(tokens: &[String], term: &str) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let count = tokens.iter().filter(|token| token.as_str() == term).count();
    count as f64 / tokens.len() as f64
}

/// Smoothed inverse document frequency of `term` in `corpus`.
pub fn inverse_document_frequency(corpus: &Corpus, term: &str) -> f64 {
    let doc_count = corpus.len() as f64;
    let containing = corpus.document_frequency(term) as f64;
    ((doc_count + 1.0) / (containing + 1.0)).ln() + 1.0
}

/// Converts documents into sparse TF-IDF vectors against a shared corpus.
pub struct TfIdfVectorizer {
    analyzer: Arc<dyn Analyzer>,
}

impl TfIdfVectorizer {
    /// Create a vectorizer over the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        TfIdfVectorizer { analyzer }
    }

    /// Create a vectorizer over the standard catalog pipeline.
    pub fn standard() -> Result<Self> {
        Ok(TfIdfVectorizer::new(Arc::new(PipelineAnalyzer::standard()?)))
    }

    /// Run raw text through the analyzer and collect the token texts.
    pub fn token_texts(&self, text: &str) -> Result<Vec<String>> {
        self.analyzer.token_texts(text)
    }

    /// Tokenize raw text and vectorize it against `corpus`.
    pub fn vectorize(&self, text: &str, corpus: &Corpus) -> Result<TermVector> {
        let tokens = self.token_texts(text)?;
        Ok(self.vectorize_tokens(&tokens, corpus))
    }

    /// Vectorize an already-tokenized document against `corpus`.
    ///
    /// An empty document yields an empty vector; there is no meaningful
    /// frequency to normalize by.
    pub fn vectorize_tokens(&self, tokens: &[String], corpus: &Corpus) -> TermVector {
        let mut vector = TermVector::new();
        if tokens.is_empty() {
            return vector;
        }

        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let total = tokens.len() as f64;
        for (term, count) in counts {
            let tf = count as f64 / total;
            let idf = inverse_document_frequency(corpus, term);
            vector.set_weight(term, tf * idf);
        }
        vector
    }
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
