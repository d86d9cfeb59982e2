//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod note_repository;

pub use note_repository::*;
