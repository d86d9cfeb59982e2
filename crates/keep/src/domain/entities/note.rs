//! Note - the persisted title/content record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Note - a short text note
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Set by storage, used for listing order only
    pub created_at: DateTime<Utc>,
}

/// Validated note fields, ready to be handed to storage.
///
/// Only obtainable through [`crate::validate`], so both fields are
/// guaranteed to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    content: String,
}

impl NewNote {
    pub(crate) fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Materialize a Note with a storage-assigned id and timestamp
    pub fn into_note(self, id: Uuid, created_at: DateTime<Utc>) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            created_at,
        }
    }
}

/// Candidate note as received from a client, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }
}
