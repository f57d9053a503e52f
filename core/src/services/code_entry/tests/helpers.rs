//! Shared fixtures for code-entry tests

use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain::entities::method::{NextMethod, VerificationMethod};
use crate::services::code_entry::{
    CodeEntryConfig, CodeEntryController, CodeEntryEvent, CodeEntryParams,
};

/// Controller in manual-tick mode together with its event receiver
pub fn manual_controller() -> (CodeEntryController, UnboundedReceiver<CodeEntryEvent>) {
    CodeEntryController::new(CodeEntryConfig::manual())
}

/// Five-digit SMS delivery with a voice-call fallback after `timeout` seconds
pub fn sms_params(timeout: Option<u32>) -> CodeEntryParams {
    CodeEntryParams::new("+16505550100", VerificationMethod::Sms { length: 5 })
        .with_next_method(NextMethod::Call, timeout)
}

/// Missed-call delivery expecting the last `length` digits of the caller
pub fn missed_call_params(prefix: &str, length: usize) -> CodeEntryParams {
    CodeEntryParams::new(
        "+16505550100",
        VerificationMethod::MissedCall {
            prefix: prefix.to_string(),
            length,
        },
    )
}

/// Drains every event currently queued on the receiver
pub fn drain(rx: &mut UnboundedReceiver<CodeEntryEvent>) -> Vec<CodeEntryEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
