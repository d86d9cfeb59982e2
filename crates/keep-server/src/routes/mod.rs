//! Keep API Routes
//!
//! - /notes - Note creation and listing
//! - /notes/:id - Note lookup

pub mod error;
pub mod note;
pub mod swagger;
