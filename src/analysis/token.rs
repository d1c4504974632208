//! Token types for text analysis.
//!
//! Tokens are the units that flow through the analysis pipeline: a tokenizer
//! produces them from raw text, filters transform them, and the scoring layer
//! consumes their text.
//!
//! # Examples
//!
//! ```
//! use shelfmatch::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```

use serde::{Deserialize, Serialize};

/// A single unit of text produced by tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,
    /// The position of this token in the stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

/// A boxed iterator of tokens, the currency of the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
