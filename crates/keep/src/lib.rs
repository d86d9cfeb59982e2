//! Keep Domain Library
//!
//! Core domain types and interfaces for the Keep note service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Note, NewNote, NoteDraft)
//!   - `validation`: Field rules applied before persistence
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use keep::{validate, NoteDraft, NoteRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    parse_note_id, validate, FieldViolation, NewNote, Note, NoteDraft, NoteError, StorageError,
};
pub use ports::NoteRepository;
