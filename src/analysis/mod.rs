//! Text analysis for catalog documents.
//!
//! Book text and user preferences pass through the same pipeline before
//! scoring: a tokenizer splits them into word tokens, filters normalize the
//! tokens, and the scoring layer works on the resulting terms.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
