//! Token filters transform the stream a tokenizer produced.
//!
//! # Examples
//!
//! ```
//! use shelfmatch::analysis::token::Token;
//! use shelfmatch::analysis::token_filter::{LowercaseFilter, TokenFilter};
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait TokenFilter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// The name of this filter.
    fn name(&self) -> &'static str;
}

/// A filter that converts token text to lowercase.
///
/// Matching is case-insensitive throughout the recommender, so this filter
/// sits in every analysis pipeline.
#[derive(Debug, Clone, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|mut token| {
            token.text = token.text.to_lowercase();
            token
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
