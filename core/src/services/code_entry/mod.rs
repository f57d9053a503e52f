//! Code-entry controller module for the phone sign-in flow
//!
//! This module provides the complete headless logic of a code-entry
//! screen including:
//! - Digit-only input with length clamping and completion detection
//! - The resend countdown and the alternate-option control it gates
//! - Keystroke gating while a submission is in flight
//! - The outbound event stream a rendering collaborator consumes

mod config;
mod controller;
mod countdown;
mod events;

#[cfg(test)]
mod tests;

pub use config::{CodeEntryConfig, CodeEntryParams};
pub use controller::{CodeEntryController, EntryPhase};
pub use countdown::Countdown;
pub use events::{AppliedCode, CodeEntryEvent, KeystrokeDecision};
