//! Corpus statistics backing IDF computation.

use ahash::{AHashMap, AHashSet};

/// Document-frequency summary of a collection of tokenized documents.
///
/// Each document contributes at most one count per distinct term, however
/// often the term repeats inside it. The recommendation engine rebuilds a
/// corpus per request from the candidate books plus the user's preference
/// profile, so statistics always reflect the catalog as currently stored.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_count: usize,
    document_frequencies: AHashMap<String, usize>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus::default()
    }

    /// Build a corpus from already-tokenized documents.
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        let mut corpus = Corpus::new();
        for document in documents {
            corpus.add_document(document);
        }
        corpus
    }

    /// Add one tokenized document to the statistics.
    pub fn add_document(&mut self, tokens: &[String]) {
        let mut seen: AHashSet<&str> = AHashSet::new();
        for token in tokens {
            if seen.insert(token.as_str()) {
                *self
                    .document_frequencies
                    .entry(token.clone())
                    .or_insert(0) += 1;
            }
        }
        self.doc_count += 1;
    }

    /// Number of documents added so far.
    pub fn len(&self) -> usize {
        self.doc_count
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.doc_count == 0
    }

    /// How many documents contain `term` at least once.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequencies.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms seen across all documents.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequencies.len()
    }
}
