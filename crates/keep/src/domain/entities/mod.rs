//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Note: the persisted title/content record

mod note;

pub use note::*;
