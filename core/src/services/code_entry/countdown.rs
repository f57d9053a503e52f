//! Resend countdown state.
//!
//! Plain seconds-left bookkeeping, deliberately free of any clock. Time
//! advances only through [`Countdown::tick`], which the controller drives
//! either from its own ticker task or from a host-provided scheduler.

/// Seconds remaining until the alternate option unlocks.
///
/// `None` means the current screen was configured without a countdown. The
/// value never increases on its own and never drops below zero; each tick
/// removes at most one second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: Option<u32>,
}

impl Countdown {
    /// Starts counting from `seconds`, replacing any previous countdown.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = Some(seconds);
    }

    /// Removes the countdown entirely.
    pub fn clear(&mut self) {
        self.remaining = None;
    }

    /// Advances one second.
    ///
    /// Returns true when the remaining time actually changed; ticks at
    /// zero or without a countdown are no-ops.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            Some(r) if r > 0 => {
                self.remaining = Some(r - 1);
                true
            }
            _ => false,
        }
    }

    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// True while a non-zero countdown gates the alternate option.
    pub fn is_pending(&self) -> bool {
        matches!(self.remaining, Some(r) if r > 0)
    }
}
