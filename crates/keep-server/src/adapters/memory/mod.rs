//! In-Memory Repository Implementations

mod note_repository;

pub use note_repository::InMemoryNoteRepository;
