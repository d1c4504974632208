//! Book records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::user::UserProfile;

/// A book listed for swapping, with its owner embedded.
///
/// Recommendation responses return these records unchanged; scores are an
/// internal ranking detail and never leave the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique book identifier.
    pub id: String,
    /// ISBN as listed by the owner.
    pub isbn: String,
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
    /// Free-text description.
    pub desc: String,
    /// Genre label, when the owner picked one.
    #[serde(default)]
    pub genre: Option<String>,
    /// Physical condition, e.g. "good" or "worn".
    #[serde(default)]
    pub condition: Option<String>,
    /// Language of the text.
    #[serde(default)]
    pub language: Option<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Whether the book is currently offered for swapping.
    pub is_available: bool,
    /// The listing owner. Proximity scoring reads this user's location.
    pub owner: UserProfile,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Create an available book with a generated id.
    pub fn new<S: Into<String>>(isbn: S, title: S, author: S, desc: S, owner: UserProfile) -> Self {
        let now = Utc::now();
        Book {
            id: Uuid::new_v4().to_string(),
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            desc: desc.into(),
            genre: None,
            condition: None,
            language: None,
            image: None,
            is_available: true,
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the genre label.
    pub fn with_genre<S: Into<String>>(mut self, genre: S) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// Set the condition label.
    pub fn with_condition<S: Into<String>>(mut self, condition: S) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// The text a book is matched on: title, description, and genre when
    /// present, joined with spaces. Empty segments are dropped so a bare
    /// record does not contribute stray whitespace.
    pub fn content_text(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.title.is_empty() {
            parts.push(&self.title);
        }
        if !self.desc.is_empty() {
            parts.push(&self.desc);
        }
        if let Some(genre) = &self.genre {
            if !genre.is_empty() {
                parts.push(genre);
            }
        }
        parts.join(" ")
    }
}
