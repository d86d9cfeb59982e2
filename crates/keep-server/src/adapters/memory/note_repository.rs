//! In-memory implementation of NoteRepository
//!
//! Process-local storage for tests and database-less runs. Notes are
//! kept in insertion order and lost on restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use keep::{NewNote, Note, NoteRepository, StorageError};

/// In-memory implementation of NoteRepository
#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, note: &NewNote) -> Result<Note, StorageError> {
        let mut notes = self.notes.write().await;

        let mut id = Uuid::new_v4();
        while notes.iter().any(|n| n.id == id) {
            id = Uuid::new_v4();
        }

        let created = note.clone().into_note(id, Utc::now());
        notes.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StorageError> {
        let notes = self.notes.read().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Note>, StorageError> {
        Ok(self.notes.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keep::{validate, NoteDraft};
    use std::sync::Arc;

    fn new_note(title: &str) -> NewNote {
        validate(NoteDraft::new(title, "content")).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryNoteRepository::new();
        let created = repo.create(&new_note("first")).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let repo = InMemoryNoteRepository::new();
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_unique_ids() {
        let repo = Arc::new(InMemoryNoteRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(&new_note(&format!("n{i}"))).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 32);
        assert_eq!(repo.find_all().await.unwrap().len(), 32);
    }
}
