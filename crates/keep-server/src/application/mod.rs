//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and the HTTP layer.

mod note_service;

pub use note_service::NoteService;
