//! Note Application Service (Use Case)
//!
//! Orchestrates validation, storage and error classification for notes.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use keep::{parse_note_id, validate, Note, NoteDraft, NoteError, NoteRepository, StorageError};

/// Application service for Note operations
pub struct NoteService<R: NoteRepository + ?Sized> {
    repo: Arc<R>,
    storage_timeout: Duration,
}

impl<R: NoteRepository + ?Sized> NoteService<R> {
    pub fn new(repo: Arc<R>, storage_timeout: Duration) -> Self {
        Self {
            repo,
            storage_timeout,
        }
    }

    /// Create a new Note after validating every field
    pub async fn create(&self, draft: NoteDraft) -> Result<Note, NoteError> {
        let new_note = validate(draft).map_err(NoteError::InvalidInput)?;

        let note = self
            .bounded("create note", self.repo.create(&new_note))
            .await?;

        tracing::info!("Created Note: {}", note.id);

        Ok(note)
    }

    /// Get a Note by its textual ID
    pub async fn get_by_id(&self, id: &str) -> Result<Note, NoteError> {
        let id = parse_note_id(id).map_err(|v| NoteError::InvalidInput(vec![v]))?;

        self.bounded("get note", self.repo.find_by_id(id))
            .await?
            .ok_or(NoteError::NotFound)
    }

    /// Get all Notes in storage order
    pub async fn list_all(&self) -> Result<Vec<Note>, NoteError> {
        self.bounded("list notes", self.repo.find_all()).await
    }

    /// Run a storage call under the deadline, reclassifying failures.
    ///
    /// Dropping the returned future drops the storage call with it.
    async fn bounded<T, F>(&self, action: &str, call: F) -> Result<T, NoteError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        let outcome = match tokio::time::timeout(self.storage_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(StorageError::new(format!(
                "timed out after {:?}",
                self.storage_timeout
            ))),
        };

        outcome.map_err(|e| {
            tracing::error!(error = %e, "Error during {}", action);
            NoteError::from(e)
        })
    }
}
