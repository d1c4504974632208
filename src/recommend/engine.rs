//! The recommendation engine.

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;

use crate::error::{Result, ShelfmatchError};
use crate::geo::GeoPoint;
use crate::model::{Book, UserProfile};
use crate::recommend::RecommendMode;
use crate::recommend::config::RecommendConfig;
use crate::scoring::corpus::Corpus;
use crate::scoring::similarity::cosine_similarity;
use crate::scoring::tfidf::{TermVector, TfIdfVectorizer};
use crate::store::CatalogStore;

/// A candidate book paired with its ranking score. Internal; scores never
/// leave the engine.
#[derive(Debug, Clone)]
struct ScoredBook {
    book: Book,
    score: f64,
}

/// Scores and ranks catalog books for a user.
///
/// The engine is stateless between requests: every call re-reads the catalog
/// through the injected store and rebuilds corpus statistics from it, so
/// results always reflect the current listings.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use shelfmatch::model::{Book, UserProfile};
/// use shelfmatch::recommend::RecommendationEngine;
/// use shelfmatch::store::MemoryStore;
///
/// # fn main() -> shelfmatch::error::Result<()> {
/// let store = Arc::new(MemoryStore::new());
///
/// let owner = UserProfile::new("Maya", "maya@example.com");
/// store.add_book(Book::new(
///     "9780547928227",
///     "The Hobbit",
///     "J.R.R. Tolkien",
///     "A reluctant hobbit on a fantasy adventure",
///     owner,
/// ));
///
/// let reader_id = store.add_user(
///     UserProfile::new("Rohan", "rohan@example.com")
///         .with_preferences(vec!["fantasy".to_string(), "adventure".to_string()]),
/// );
///
/// let engine = RecommendationEngine::new(store)?;
/// let books = tokio_test::block_on(engine.content_based(&reader_id, 10))?;
/// assert_eq!(books.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct RecommendationEngine {
    store: Arc<dyn CatalogStore>,
    config: RecommendConfig,
    vectorizer: TfIdfVectorizer,
}

impl RecommendationEngine {
    /// Create an engine with default configuration and the standard
    /// analysis pipeline.
    pub fn new(store: Arc<dyn CatalogStore>) -> Result<Self> {
        Self::with_config(store, RecommendConfig::default())
    }

    /// Create an engine with custom scoring configuration.
    pub fn with_config(store: Arc<dyn CatalogStore>, config: RecommendConfig) -> Result<Self> {
        Ok(RecommendationEngine {
            store,
            config,
            vectorizer: TfIdfVectorizer::standard()?,
        })
    }

    /// The active scoring configuration.
    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Recommend books for `user_id` under the given mode, best first.
    pub async fn recommend(
        &self,
        user_id: &str,
        mode: RecommendMode,
        limit: usize,
    ) -> Result<Vec<Book>> {
        match mode {
            RecommendMode::ContentBased => self.content_based(user_id, limit).await,
            RecommendMode::LocationBased => self.location_based(user_id, limit).await,
            RecommendMode::Hybrid => self.hybrid(user_id, limit).await,
        }
    }

    /// Rank books by TF-IDF similarity between the user's preferences and
    /// each book's title, description, and genre.
    ///
    /// A user without preferences matches nothing; every candidate scores
    /// zero and the ranking degrades to store order.
    pub async fn content_based(&self, user_id: &str, limit: usize) -> Result<Vec<Book>> {
        let user = self.load_user(user_id).await?;
        let books = self.store.all_books().await?;
        debug!(
            "content scoring {} candidate books for user {user_id}",
            books.len()
        );

        let (corpus, book_docs, user_vector) = self.build_content_context(&user, &books)?;

        let scored: Vec<ScoredBook> = books
            .into_iter()
            .zip(book_docs)
            .map(|(book, tokens)| {
                let book_vector = self.vectorizer.vectorize_tokens(&tokens, &corpus);
                let similarity = cosine_similarity(&user_vector, &book_vector);
                ScoredBook {
                    book,
                    score: similarity * self.config.content_scale,
                }
            })
            .collect();

        Ok(top_ranked(scored, limit))
    }

    /// Rank books by how close each owner is to the user.
    ///
    /// Owners without a location score zero and sink to the bottom. Errors
    /// with [`ShelfmatchError::LocationUndefined`] when the requesting user
    /// has no location.
    pub async fn location_based(&self, user_id: &str, limit: usize) -> Result<Vec<Book>> {
        let user = self.load_user(user_id).await?;
        let origin = self.require_location(&user)?;
        let books = self.store.all_books().await?;
        debug!(
            "location scoring {} candidate books for user {user_id}",
            books.len()
        );

        let scored: Vec<ScoredBook> = books
            .into_iter()
            .map(|book| {
                let score = match book.owner.location {
                    Some(owner_location) => {
                        let distance = origin.distance_to(&owner_location);
                        let mut score = self.config.distance_base / (1.0 + distance);
                        if distance < self.config.proximity_radius_km {
                            score += self.config.proximity_bonus;
                        }
                        score
                    }
                    None => 0.0,
                };
                ScoredBook { book, score }
            })
            .collect();

        Ok(top_ranked(scored, limit))
    }

    /// Rank books by a weighted blend of proximity and content similarity.
    ///
    /// An owner without a location zeroes only the distance component; the
    /// book still competes on its content share. Errors with
    /// [`ShelfmatchError::LocationUndefined`] when the requesting user has
    /// no location.
    pub async fn hybrid(&self, user_id: &str, limit: usize) -> Result<Vec<Book>> {
        let user = self.load_user(user_id).await?;
        let origin = self.require_location(&user)?;
        let books = self.store.all_books().await?;
        debug!(
            "hybrid scoring {} candidate books for user {user_id}",
            books.len()
        );

        let (corpus, book_docs, user_vector) = self.build_content_context(&user, &books)?;

        let scored: Vec<ScoredBook> = books
            .into_iter()
            .zip(book_docs)
            .map(|(book, tokens)| {
                let distance_component = match book.owner.location {
                    Some(owner_location) => {
                        let distance = origin.distance_to(&owner_location);
                        let mut component = self.config.distance_base / (1.0 + distance);
                        if distance < self.config.proximity_radius_km {
                            component += self.config.hybrid_proximity_bonus;
                        }
                        component
                    }
                    None => 0.0,
                };

                let book_vector = self.vectorizer.vectorize_tokens(&tokens, &corpus);
                let similarity = cosine_similarity(&user_vector, &book_vector);
                let content_component = similarity * self.config.content_scale;

                let score = distance_component * self.config.distance_weight
                    + content_component * self.config.content_weight;
                ScoredBook { book, score }
            })
            .collect();

        Ok(top_ranked(scored, limit))
    }

    /// Tokenize every candidate and the user's preference profile, build the
    /// shared corpus, and vectorize the profile against it.
    ///
    /// The corpus counts each book document once plus the user profile, so
    /// IDF reflects exactly the documents competing in this request.
    fn build_content_context(
        &self,
        user: &UserProfile,
        books: &[Book],
    ) -> Result<(Corpus, Vec<Vec<String>>, TermVector)> {
        let mut book_docs = Vec::with_capacity(books.len());
        for book in books {
            book_docs.push(self.vectorizer.token_texts(&book.content_text())?);
        }
        let user_tokens = self.vectorizer.token_texts(&user.preference_text())?;

        let mut corpus = Corpus::new();
        for document in &book_docs {
            corpus.add_document(document);
        }
        corpus.add_document(&user_tokens);

        let user_vector = self.vectorizer.vectorize_tokens(&user_tokens, &corpus);
        Ok((corpus, book_docs, user_vector))
    }

    async fn load_user(&self, user_id: &str) -> Result<UserProfile> {
        self.store
            .find_user(user_id)
            .await?
            .ok_or_else(|| ShelfmatchError::user_not_found(user_id))
    }

    fn require_location(&self, user: &UserProfile) -> Result<GeoPoint> {
        user.location
            .ok_or_else(|| ShelfmatchError::location_undefined(&user.id))
    }
}

impl std::fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("vectorizer", &self.vectorizer)
            .finish()
    }
}

/// Stable descending sort on score, truncate, and strip the scores.
///
/// The sort is stable, so candidates with equal scores keep the order the
/// store returned them in.
fn top_ranked(mut scored: Vec<ScoredBook>, limit: usize) -> Vec<Book> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(limit);
    scored.into_iter().map(|entry| entry.book).collect()
}
