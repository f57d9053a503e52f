//! Domain entities representing the state owned by the code-entry screen.

pub mod code_input;
pub mod method;

// Re-export commonly used types
pub use code_input::{CodeChange, CodeInput};
pub use method::{NextMethod, VerificationMethod, DEFAULT_CODE_LENGTH};
