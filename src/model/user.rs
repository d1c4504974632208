//! User profile records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::GeoPoint;

/// A marketplace user as the catalog store returns them.
///
/// Two fields drive recommendations: `preferences` feeds the content
/// profile, `location` feeds proximity scoring. Both are optional in the
/// sense that a user may never have filled them in, and the scoring modes
/// degrade accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Preferred genres and topics; empty when the user never picked any.
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Geographic position, when the user shared one.
    #[serde(default)]
    pub location: Option<GeoPoint>,
    /// Whether the account is active.
    pub is_active: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create an active user with a generated id and no preferences or
    /// location.
    pub fn new<S: Into<String>>(name: S, email: S) -> Self {
        let now = Utc::now();
        UserProfile {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            preferences: Vec::new(),
            location: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the preference list.
    pub fn with_preferences(mut self, preferences: Vec<String>) -> Self {
        self.preferences = preferences;
        self
    }

    /// Set the geographic position.
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Space-joined preference text, the document a user's content profile
    /// is built from. Empty when the user has no preferences.
    pub fn preference_text(&self) -> String {
        self.preferences.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = UserProfile::new("Asha", "asha@example.com");
        assert!(!user.id.is_empty());
        assert_eq!(user.name, "Asha");
        assert_eq!(user.email, "asha@example.com");
        assert!(user.preferences.is_empty());
        assert!(user.location.is_none());
        assert!(user.is_active);
    }

    #[test]
    fn test_builder_methods() {
        let location = GeoPoint::new(27.7, 85.3).unwrap();
        let user = UserProfile::new("Asha", "asha@example.com")
            .with_preferences(vec!["fantasy".to_string(), "history".to_string()])
            .with_location(location);

        assert_eq!(user.preferences.len(), 2);
        assert_eq!(user.location, Some(location));
    }

    #[test]
    fn test_preference_text() {
        let user = UserProfile::new("Asha", "asha@example.com")
            .with_preferences(vec!["science fiction".to_string(), "mystery".to_string()]);
        assert_eq!(user.preference_text(), "science fiction mystery");

        let empty = UserProfile::new("Bimal", "bimal@example.com");
        assert_eq!(empty.preference_text(), "");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        // Records from older stores may omit preferences and location.
        let json = r#"{
            "id": "u-1",
            "name": "Asha",
            "email": "asha@example.com",
            "is_active": true,
            "created_at": "2024-05-01T09:00:00Z",
            "updated_at": "2024-05-01T09:00:00Z"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert!(user.preferences.is_empty());
        assert!(user.location.is_none());
    }
}
