//! Domain-specific error types for the code-entry flow.
//!
//! The error surface is deliberately small. Malformed text never produces
//! an error: it is filtered locally and the corrected value handed back to
//! the caller. Verification outcomes (wrong code, expired code, network
//! failures) belong to the collaborator that performs the submission and
//! reach the screen through the animate cues, not through this type.

use thiserror::Error;

/// Errors surfaced by code-entry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeEntryError {
    /// An operation that needs a verification method ran before any
    /// `configure` call delivered one
    #[error("no verification method has been configured")]
    NotConfigured,

    /// The alternate option was requested while the countdown still gates it
    #[error("alternate option is locked for another {remaining} seconds")]
    CountdownActive {
        /// Seconds left until the option unlocks
        remaining: u32,
    },
}

pub type EntryResult<T> = Result<T, CodeEntryError>;
