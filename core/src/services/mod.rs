//! Services containing the screen flow logic.

pub mod code_entry;

// Re-export commonly used types
pub use code_entry::{
    AppliedCode, CodeEntryConfig, CodeEntryController, CodeEntryEvent, CodeEntryParams,
    EntryPhase, KeystrokeDecision,
};
