//! Keep Data Models
//!
//! - Note request/response DTOs
//! - Response envelope shared by every endpoint

mod envelope;
mod note;

pub use envelope::*;
pub use note::*;
