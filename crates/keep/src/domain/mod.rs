//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, validation rules, and errors.

pub mod entities;
pub mod errors;
pub mod validation;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use validation::*;
