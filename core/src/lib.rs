//! # OtpEntry Core
//!
//! Headless logic for the code-entry screen of a phone sign-in flow.
//! This crate owns the verification method model, the digit-only input
//! state, the resend countdown with its alternate-option control, and the
//! event stream a rendering collaborator consumes. Widgets, networking
//! and the verification call itself live with the host application.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
