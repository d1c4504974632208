//! Relevance scoring primitives.
//!
//! Content matching is classic TF-IDF: a [`Corpus`](corpus::Corpus) collects
//! document frequencies, a [`TfIdfVectorizer`](tfidf::TfIdfVectorizer) turns
//! documents into sparse term-weight vectors against that corpus, and
//! [`cosine_similarity`](similarity::cosine_similarity) compares two vectors.
//! The recommendation engine composes these into ranked results.

pub mod corpus;
pub mod similarity;
pub mod tfidf;

pub use corpus::Corpus;
pub use similarity::cosine_similarity;
pub use tfidf::{TermVector, TfIdfVectorizer};
