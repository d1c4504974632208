//! Error types for the shelfmatch library.
//!
//! All fallible operations return [`ShelfmatchError`] through the crate-wide
//! [`Result`] alias. Domain failures the surrounding marketplace maps to HTTP
//! statuses (`UserNotFound`, `LocationUndefined`) get their own variants;
//! everything else falls into ambient categories with string payloads.
//!
//! # Examples
//!
//! ```
//! use shelfmatch::error::{Result, ShelfmatchError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShelfmatchError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for shelfmatch operations.
#[derive(Error, Debug)]
pub enum ShelfmatchError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Catalog store errors surfaced by a backend.
    #[error("Store error: {0}")]
    Store(String),

    /// The requested user does not exist in the catalog.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The user has no usable coordinates for location-aware scoring.
    #[error("User location is not defined: {0}")]
    LocationUndefined(String),

    /// Invalid argument supplied by a caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ShelfmatchError.
pub type Result<T> = std::result::Result<T, ShelfmatchError>;

impl ShelfmatchError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ShelfmatchError::Analysis(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        ShelfmatchError::Store(msg.into())
    }

    /// Create a user-not-found error for the given user id.
    pub fn user_not_found<S: Into<String>>(user_id: S) -> Self {
        ShelfmatchError::UserNotFound(user_id.into())
    }

    /// Create a location-undefined error for the given user id.
    pub fn location_undefined<S: Into<String>>(user_id: S) -> Self {
        ShelfmatchError::LocationUndefined(user_id.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ShelfmatchError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ShelfmatchError::Other(msg.into())
    }
}
