//! PostgreSQL Repository Implementations

mod note_repository;

pub use note_repository::PgNoteRepository;
