//! PostgreSQL implementation of NoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use keep::{NewNote, Note, NoteRepository, StorageError};

/// PostgreSQL implementation of NoteRepository
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct NoteRow {
    id: Uuid,
    title: String,
    content: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn create(&self, note: &NewNote) -> Result<Note, StorageError> {
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO notes (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content, created_at
            "#,
        )
        .bind(note.title())
        .bind(note.content())
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::new)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>, StorageError> {
        let row = sqlx::query_as::<_, NoteRow>(
            "SELECT id, title, content, created_at FROM notes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::new)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Note>, StorageError> {
        let rows = sqlx::query_as::<_, NoteRow>(
            "SELECT id, title, content, created_at FROM notes ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::new)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
