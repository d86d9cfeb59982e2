//! Note Repository Port
//!
//! Abstract interface for Note persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::StorageError, NewNote, Note};

/// Repository interface for Note entities
///
/// Implementations own id assignment and must hand out a unique id
/// per successful `create`, including under concurrent calls.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Persist a validated note, returning it with its assigned id
    async fn create(&self, note: &NewNote) -> Result<Note, StorageError>;

    /// Find a Note by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StorageError>;

    /// Find all Notes, in storage order
    async fn find_all(&self) -> Result<Vec<Note>, StorageError>;
}
