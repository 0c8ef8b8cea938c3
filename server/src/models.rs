//! Domain models and wire types.
//!
//! Field names follow the frontend's JSON contract: camelCase where the
//! wire uses it, and Go-style `omitempty` semantics for optional speaker
//! fields (an empty string is absent).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered workshop attendee.
///
/// Immutable after creation except by deletion. Email uniqueness is not
/// enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Store-assigned identity.
    #[serde(default)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Free-text role or title.
    pub designation: String,
    /// Server-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A workshop speaker.
///
/// No field is mandatory; empty strings are accepted and the optional
/// fields are omitted from JSON when empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Speaker {
    /// Store-assigned identity.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Short biography.
    #[serde(default)]
    pub bio: String,
    /// Avatar image reference.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub avatar: String,
    /// LinkedIn handle.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub linkedin: String,
    /// Twitter handle.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub twitter: String,
}

impl Speaker {
    /// Apply the speaker partial-update policy to this stored record.
    ///
    /// `name` and `bio` are always overwritten, even with empty strings.
    /// `avatar`, `linkedin`, and `twitter` are overwritten only when the
    /// incoming value is non-empty; an empty incoming value leaves the
    /// stored value untouched. The incoming `id` is ignored.
    ///
    /// This asymmetry with [`Session`] updates (full overwrite) is a
    /// deliberate product behavior; see the regression tests below.
    pub fn apply_update(&mut self, update: Speaker) {
        self.name = update.name;
        self.bio = update.bio;
        if !update.avatar.is_empty() {
            self.avatar = update.avatar;
        }
        if !update.linkedin.is_empty() {
            self.linkedin = update.linkedin;
        }
        if !update.twitter.is_empty() {
            self.twitter = update.twitter;
        }
    }
}

/// A scheduled workshop session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Store-assigned identity.
    #[serde(default)]
    pub id: String,
    /// Session title.
    #[serde(default)]
    pub title: String,
    /// Session description.
    #[serde(default)]
    pub description: String,
    /// Free-text schedule slot, not a structured timestamp.
    #[serde(default)]
    pub time: String,
    /// Referenced speaker identities. Entries may reference speakers that
    /// no longer exist; dangling references are dropped at read time.
    #[serde(default)]
    pub speakers: Vec<String>,
}

/// A session composed with its resolved speaker records.
///
/// Built at query time, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SessionWithSpeakers {
    /// The underlying session record.
    #[serde(flatten)]
    pub session: Session,
    /// Resolved speakers, omitted from JSON when empty.
    #[serde(rename = "speakerDetails", skip_serializing_if = "Vec::is_empty")]
    pub speaker_details: Vec<Speaker>,
}

/// One designation label with the number of attendees holding it.
///
/// Built at query time; ordering across designations is unspecified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesignationCount {
    /// Exact designation string as registered.
    pub designation: String,
    /// Number of attendees sharing it.
    pub count: usize,
}

/// Admin dashboard statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    /// Attendee counts grouped by designation.
    pub designation_breakdown: Vec<DesignationCount>,
}
