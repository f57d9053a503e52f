//! Outbound events and inbound edit decisions for the code-entry flow.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::next_option::NextOption;

/// Events the controller emits for its rendering collaborator.
///
/// Delivery is fire-and-forget over an unbounded channel; the controller
/// never waits on the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeEntryEvent {
    /// The entered code reached the expected length, or `submit` forced
    /// whatever was entered out. The collaborator should attempt
    /// verification with `code`.
    CodeComplete { code: String },

    /// The user activated the alternate-option control; a fresh code
    /// should be requested through the offered channel.
    AlternateRequested,

    /// The continue affordance should be enabled or disabled.
    InputEnabledChanged { enabled: bool },

    /// The alternate-option control changed, either from a countdown tick
    /// or from reconfiguration.
    NextOptionUpdated(NextOption),

    /// The collaborator reported a rejected code; play the error cue and
    /// surface `message` when present.
    AnimateError { message: Option<String> },

    /// The collaborator reported success; play the success cue.
    AnimateSuccess,
}

/// What the input widget should do with a proposed insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeystrokeDecision {
    /// Apply the raw insertion unchanged
    Apply,
    /// Discard the raw edit and apply this filtered text instead
    ApplyFiltered(String),
    /// Ignore the edit entirely; a submission is in flight
    Reject,
}

/// What the widget should display after a programmatic code update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedCode {
    /// The provided text was stored as-is
    Unchanged,
    /// The stored value differs from the input; show this text instead
    Corrected(String),
}
