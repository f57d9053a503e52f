//! Configuration types for the code-entry controller.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::method::{NextMethod, VerificationMethod};

/// Per-screen parameters delivered whenever a code is sent or re-sent.
///
/// One value of this type fully describes a code-entry screen; applying it
/// through `configure` supersedes everything from the previous delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntryParams {
    /// The phone number being signed in, in display form
    pub phone_number: String,
    /// Login email on record, when the server reports one
    pub email: Option<String>,
    /// How the current code was delivered
    pub method: VerificationMethod,
    /// Fallback channel offered once the countdown allows it
    pub next_method: Option<NextMethod>,
    /// Seconds until the fallback unlocks; `None` disables the countdown
    pub timeout_seconds: Option<u32>,
}

impl CodeEntryParams {
    /// Creates parameters with no fallback channel and no countdown.
    pub fn new(phone_number: impl Into<String>, method: VerificationMethod) -> Self {
        Self {
            phone_number: phone_number.into(),
            email: None,
            method,
            next_method: None,
            timeout_seconds: None,
        }
    }

    /// Adds the fallback channel and the countdown gating it.
    pub fn with_next_method(mut self, next: NextMethod, timeout_seconds: Option<u32>) -> Self {
        self.next_method = Some(next);
        self.timeout_seconds = timeout_seconds;
        self
    }
}

/// Configuration for controller behavior
#[derive(Debug, Clone)]
pub struct CodeEntryConfig {
    /// Interval between automatic countdown ticks
    pub tick_interval: Duration,
    /// Whether to spawn a ticker task per configuration; disable to drive
    /// `tick` from an external scheduler instead
    pub auto_tick: bool,
}

impl Default for CodeEntryConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            auto_tick: true,
        }
    }
}

impl CodeEntryConfig {
    /// Configuration for hosts that drive the countdown themselves.
    pub fn manual() -> Self {
        Self {
            auto_tick: false,
            ..Self::default()
        }
    }
}
