//! Repository doubles for service and route tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use keep::{NewNote, Note, NoteRepository, StorageError};

/// Fails every call and counts how many reached it
#[derive(Default)]
pub struct FailingNoteRepository {
    calls: AtomicUsize,
}

impl FailingNoteRepository {
    pub const CAUSE: &'static str = "pool timed out while waiting for an open connection";

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::new(Self::CAUSE))
    }
}

#[async_trait]
impl NoteRepository for FailingNoteRepository {
    async fn create(&self, _note: &NewNote) -> Result<Note, StorageError> {
        self.fail()
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Note>, StorageError> {
        self.fail()
    }

    async fn find_all(&self) -> Result<Vec<Note>, StorageError> {
        self.fail()
    }
}

/// Sleeps before answering, for deadline tests
pub struct SlowNoteRepository {
    delay: Duration,
}

impl SlowNoteRepository {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl NoteRepository for SlowNoteRepository {
    async fn create(&self, note: &NewNote) -> Result<Note, StorageError> {
        tokio::time::sleep(self.delay).await;
        Ok(note.clone().into_note(Uuid::new_v4(), chrono::Utc::now()))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Note>, StorageError> {
        tokio::time::sleep(self.delay).await;
        Ok(None)
    }

    async fn find_all(&self) -> Result<Vec<Note>, StorageError> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}
