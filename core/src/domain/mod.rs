//! Domain layer containing the entities and value objects of the
//! code-entry screen.

pub mod entities;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::*;
pub use value_objects::*;
