//! Note request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use keep::{Note, NoteDraft};

/// Create Note request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[serde(default)]
    #[schema(example = "Groceries")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "Milk, eggs, coffee")]
    pub content: Option<String>,
}

impl From<CreateNoteRequest> for NoteDraft {
    fn from(req: CreateNoteRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

/// Read-only projection of a Note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteView {
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

impl From<Note> for NoteView {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
        }
    }
}
