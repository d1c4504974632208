//! Tokenizers split raw text into tokens.
//!
//! The catalog pipeline uses [`WordTokenizer`], which extracts maximal runs
//! of word characters and drops everything between them, so punctuation never
//! reaches the scoring layer.
//!
//! # Examples
//!
//! ```
//! use shelfmatch::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello, world!").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, ShelfmatchError};

/// Trait for tokenizers that convert text into tokens.
///
/// Implementations must be `Send + Sync` so a shared analyzer can be used
/// from concurrent requests.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the input text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// The name of this tokenizer.
    fn name(&self) -> &'static str;
}

/// A tokenizer that emits every match of a word pattern.
///
/// The default pattern is `\w+`: letters, digits, and underscore, with
/// Unicode classes included. Tokens keep their original case; lowercasing
/// belongs to the filter stage.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    pattern: Arc<Regex>,
}

impl WordTokenizer {
    /// Create a tokenizer with the default word pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ShelfmatchError::analysis(format!("Invalid token pattern: {e}")))?;
        Ok(WordTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// The pattern this tokenizer matches.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position))
            .collect();
        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &WordTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_word_tokenizer_splits_on_non_word_chars() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens = texts(&tokenizer, "Hello, world! It's 42.");
        assert_eq!(tokens, vec!["Hello", "world", "It", "s", "42"]);
    }

    #[test]
    fn test_word_tokenizer_empty_input() {
        let tokenizer = WordTokenizer::new().unwrap();
        assert!(texts(&tokenizer, "").is_empty());
        assert!(texts(&tokenizer, "  ,,, !!!").is_empty());
    }

    #[test]
    fn test_word_tokenizer_positions() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens: Vec<_> = tokenizer.tokenize("one two three").unwrap().collect();
        let positions: Vec<usize> = tokens.iter().map(|token| token.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn test_word_tokenizer_keeps_case() {
        let tokenizer = WordTokenizer::new().unwrap();
        let tokens = texts(&tokenizer, "Fantasy ADVENTURE");
        assert_eq!(tokens, vec!["Fantasy", "ADVENTURE"]);
    }

    #[test]
    fn test_custom_pattern() {
        let tokenizer = WordTokenizer::with_pattern(r"[a-z]+").unwrap();
        let tokens = texts(&tokenizer, "abc DEF ghi");
        assert_eq!(tokens, vec!["abc", "ghi"]);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert!(WordTokenizer::with_pattern("[unclosed").is_err());
    }
}
