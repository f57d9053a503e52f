//! Code-entry controller implementation.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing;
use uuid::Uuid;

use crate::domain::entities::code_input::CodeInput;
use crate::domain::entities::method::{NextMethod, VerificationMethod, DEFAULT_CODE_LENGTH};
use crate::domain::value_objects::next_option::NextOption;
use crate::domain::value_objects::phone::mask_phone;
use crate::domain::value_objects::prompt;
use crate::errors::{CodeEntryError, EntryResult};

use super::config::{CodeEntryConfig, CodeEntryParams};
use super::countdown::Countdown;
use super::events::{AppliedCode, CodeEntryEvent, KeystrokeDecision};

/// Where the screen currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    /// No verification method configured yet
    Idle,
    /// Waiting for the user to finish typing the code
    AwaitingInput,
    /// A submitted code is being verified upstream; keyboard input is locked
    Submitting,
}

/// Outcome of one background ticker pass
#[derive(Debug)]
enum TickerStep {
    /// The countdown moved; the renderer needs the refreshed option
    Updated(NextOption),
    /// Countdown absent or already at zero
    Unchanged,
    /// A later `configure` owns the state; the ticker must exit
    Superseded,
}

/// Mutable screen state guarded by the controller lock
#[derive(Debug)]
struct EntryState {
    phone_number: String,
    email: Option<String>,
    method: Option<VerificationMethod>,
    next_method: Option<NextMethod>,
    countdown: Countdown,
    code: CodeInput,
    in_progress: bool,
    session: Uuid,
}

impl EntryState {
    fn new() -> Self {
        Self {
            phone_number: String::new(),
            email: None,
            method: None,
            next_method: None,
            countdown: Countdown::default(),
            code: CodeInput::new(DEFAULT_CODE_LENGTH),
            in_progress: false,
            session: Uuid::nil(),
        }
    }

    fn next_option(&self) -> Option<NextOption> {
        self.method
            .as_ref()
            .map(|method| NextOption::evaluate(method, self.next_method, self.countdown.remaining()))
    }

    /// Advances the countdown one second and recomputes the option state.
    ///
    /// Returns `None` when nothing changed, so callers emit no event for
    /// ticks past zero.
    fn tick(&mut self) -> Option<NextOption> {
        if !self.countdown.tick() {
            return None;
        }
        tracing::trace!(
            session = %self.session,
            remaining = ?self.countdown.remaining(),
            event = "countdown_tick",
            "Countdown advanced"
        );
        self.next_option()
    }

    /// One pass of the background ticker spawned for `ticker_session`.
    ///
    /// The session check closes the gap between `JoinHandle::abort` and
    /// the task actually stopping: a pass that already left its timer
    /// sleep when `configure` replaced the state must not touch the new
    /// countdown.
    fn ticker_step(&mut self, ticker_session: Uuid) -> TickerStep {
        if self.session != ticker_session {
            return TickerStep::Superseded;
        }
        match self.tick() {
            Some(option) => TickerStep::Updated(option),
            None => TickerStep::Unchanged,
        }
    }
}

/// Headless controller for the code-entry screen of a phone sign-in flow.
///
/// Owns the entered-code buffer, the resend countdown and the stream of
/// [`CodeEntryEvent`]s a renderer consumes. Inbound operations are cheap
/// and non-blocking; the only background work is the optional one-second
/// ticker task. Every `configure` call aborts the previous ticker, and a
/// ticker pass that finds its session superseded exits on its own, so
/// only the latest ticker ever advances the countdown. Dropping the
/// controller aborts the ticker as well.
pub struct CodeEntryController {
    state: Arc<Mutex<EntryState>>,
    events: mpsc::UnboundedSender<CodeEntryEvent>,
    ticker: Option<JoinHandle<()>>,
    config: CodeEntryConfig,
}

impl CodeEntryController {
    /// Creates a controller together with the receiving end of its event
    /// stream.
    ///
    /// # Arguments
    ///
    /// * `config` - Ticker behavior; use [`CodeEntryConfig::manual`] when
    ///   the host drives [`tick`](Self::tick) from its own scheduler
    pub fn new(config: CodeEntryConfig) -> (Self, mpsc::UnboundedReceiver<CodeEntryEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let controller = Self {
            state: Arc::new(Mutex::new(EntryState::new())),
            events,
            ticker: None,
            config,
        };
        (controller, receiver)
    }

    /// Applies fresh screen parameters.
    ///
    /// This method:
    /// 1. Aborts the previous ticker task, if any
    /// 2. Clears the entered code and adopts the new expected length
    /// 3. Replaces the method, next method and countdown wholesale
    /// 4. Emits the recomputed alternate-option state
    /// 5. Spawns a new ticker when a countdown needs driving
    ///
    /// # Arguments
    ///
    /// * `params` - The delivery parameters reported by the server
    pub fn configure(&mut self, params: CodeEntryParams) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }

        let session = Uuid::new_v4();
        let (option, pending) = {
            let mut state = self.state.lock().unwrap();
            state.session = session;
            state.phone_number = params.phone_number.clone();
            state.email = params.email.clone();
            state.code.reset(params.method.expected_len());
            state.next_method = params.next_method;
            match params.timeout_seconds {
                Some(seconds) => state.countdown.start(seconds),
                None => state.countdown.clear(),
            }
            state.method = Some(params.method.clone());
            state.in_progress = false;
            (state.next_option(), state.countdown.is_pending())
        };

        tracing::info!(
            session = %session,
            phone = %mask_phone(&params.phone_number),
            method = %params.method,
            next_method = ?params.next_method,
            timeout_seconds = ?params.timeout_seconds,
            event = "screen_configured",
            "Code entry screen configured"
        );

        if let Some(option) = option {
            self.emit(CodeEntryEvent::NextOptionUpdated(option));
        }

        if self.config.auto_tick && pending {
            self.spawn_ticker(session);
        }
    }

    /// Replaces the entered code programmatically (paste, autofill, state
    /// restoration).
    ///
    /// Non-digits are stripped and overflow beyond the expected length is
    /// cut; when that changes the text, the corrected value is handed back
    /// so the widget can mirror it. Reaching the expected length emits
    /// [`CodeEntryEvent::CodeComplete`] exactly once per transition.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw replacement text, digits or not
    pub fn set_code(&self, text: &str) -> AppliedCode {
        let (corrected, events) = {
            let mut state = self.state.lock().unwrap();
            let change = state.code.set(text);

            let mut events = vec![CodeEntryEvent::InputEnabledChanged {
                enabled: !state.code.is_empty(),
            }];
            if change.newly_complete && state.method.is_some() {
                state.in_progress = true;
                tracing::info!(
                    session = %state.session,
                    length = state.code.len(),
                    event = "code_complete",
                    "Entered code reached the expected length"
                );
                events.push(CodeEntryEvent::CodeComplete {
                    code: state.code.as_str().to_string(),
                });
            }
            (change.corrected, events)
        };

        for event in events {
            self.emit(event);
        }

        match corrected {
            Some(text) => AppliedCode::Corrected(text),
            None => AppliedCode::Unchanged,
        }
    }

    /// Gates a proposed insertion from the input widget.
    ///
    /// # Returns
    ///
    /// * [`KeystrokeDecision::Reject`] - While a submission is in flight
    /// * [`KeystrokeDecision::Apply`] - When the insertion is all digits
    /// * [`KeystrokeDecision::ApplyFiltered`] - When non-digits need
    ///   stripping first
    pub fn validate_keystroke(&self, insertion: &str) -> KeystrokeDecision {
        let state = self.state.lock().unwrap();
        if state.in_progress {
            return KeystrokeDecision::Reject;
        }

        let filtered = CodeInput::filter_digits(insertion);
        if filtered == insertion {
            KeystrokeDecision::Apply
        } else {
            KeystrokeDecision::ApplyFiltered(filtered)
        }
    }

    /// Advances the countdown one second.
    ///
    /// Public so hosts running without the built-in ticker can drive the
    /// countdown from their own scheduler. Once the countdown sits at zero
    /// further calls change nothing and emit nothing.
    pub fn tick(&self) {
        // Tick and emit under one lock hold; a concurrent `configure`
        // cannot slot its fresh option between the two.
        let mut state = self.state.lock().unwrap();
        if let Some(option) = state.tick() {
            self.emit(CodeEntryEvent::NextOptionUpdated(option));
        }
    }

    /// Asks for the code to be re-sent through the offered channel.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The request was emitted to the collaborator
    /// * `Err(CodeEntryError::NotConfigured)` - No method configured yet
    /// * `Err(CodeEntryError::CountdownActive)` - The countdown still
    ///   gates the control
    pub fn request_alternate_option(&self) -> EntryResult<()> {
        let session = {
            let state = self.state.lock().unwrap();
            let option = match state.next_option() {
                Some(option) => option,
                None => return Err(CodeEntryError::NotConfigured),
            };
            if !option.active {
                let remaining = state.countdown.remaining().unwrap_or(0);
                tracing::warn!(
                    session = %state.session,
                    remaining = remaining,
                    event = "alternate_option_locked",
                    "Alternate option requested while countdown still pending"
                );
                return Err(CodeEntryError::CountdownActive { remaining });
            }
            state.session
        };

        tracing::info!(
            session = %session,
            event = "alternate_option_requested",
            "Alternate delivery option requested"
        );
        self.emit(CodeEntryEvent::AlternateRequested);
        Ok(())
    }

    /// Forces submission of whatever is currently entered.
    ///
    /// Length is deliberately not checked here; the verification
    /// collaborator owns that judgement.
    pub fn submit(&self) {
        let (code, session) = {
            let mut state = self.state.lock().unwrap();
            if state.method.is_some() {
                state.in_progress = true;
            }
            (state.code.as_str().to_string(), state.session)
        };

        tracing::info!(
            session = %session,
            length = code.len(),
            event = "code_submitted",
            "Code submitted for verification"
        );
        self.emit(CodeEntryEvent::CodeComplete { code });
    }

    /// Toggles the submission-in-flight flag.
    ///
    /// While set, [`validate_keystroke`](Self::validate_keystroke) rejects
    /// every edit. The collaborator clears the flag when verification
    /// fails so the user can correct the code.
    pub fn set_in_progress(&self, in_progress: bool) {
        let mut state = self.state.lock().unwrap();
        state.in_progress = in_progress;
        tracing::debug!(
            session = %state.session,
            in_progress = in_progress,
            event = "progress_changed",
            "Submission progress flag updated"
        );
    }

    /// Clears the entered code.
    ///
    /// Emits nothing; the caller that requested the reset also repaints
    /// the widget.
    pub fn reset_code(&self) {
        self.state.lock().unwrap().code.clear();
    }

    /// Relays a rejected-code outcome to the renderer as an error cue.
    ///
    /// # Arguments
    ///
    /// * `message` - Optional text to surface alongside the shake
    pub fn animate_error(&self, message: Option<String>) {
        self.emit(CodeEntryEvent::AnimateError { message });
    }

    /// Relays a successful verification to the renderer as a success cue.
    pub fn animate_success(&self) {
        self.emit(CodeEntryEvent::AnimateSuccess);
    }

    /// The digits entered so far.
    pub fn current_code(&self) -> String {
        self.state.lock().unwrap().code.as_str().to_string()
    }

    /// Seconds left on the countdown, when one is configured.
    pub fn remaining_seconds(&self) -> Option<u32> {
        self.state.lock().unwrap().countdown.remaining()
    }

    /// Number of digits a complete code has on the current screen.
    pub fn expected_len(&self) -> usize {
        self.state.lock().unwrap().code.expected_len()
    }

    /// Static prefix shown ahead of the input field, for missed-call
    /// verification.
    pub fn code_prefix(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.method.as_ref().and_then(|method| method.code_prefix())
    }

    /// The configured verification method, if any.
    pub fn method(&self) -> Option<VerificationMethod> {
        self.state.lock().unwrap().method.clone()
    }

    /// Current alternate-option control state, if a method is configured.
    pub fn next_option(&self) -> Option<NextOption> {
        self.state.lock().unwrap().next_option()
    }

    /// Title for the configured method, or the generic fallback before
    /// the first `configure`.
    pub fn screen_title(&self) -> &'static str {
        let state = self.state.lock().unwrap();
        match &state.method {
            Some(method) => prompt::screen_title(method),
            None => prompt::FALLBACK_TITLE,
        }
    }

    /// Sentence describing where the current code went.
    pub fn delivery_prompt(&self) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .method
            .as_ref()
            .map(|method| prompt::delivery_prompt(method, &state.phone_number, state.email.as_deref()))
    }

    pub fn is_in_progress(&self) -> bool {
        self.state.lock().unwrap().in_progress
    }

    /// Identifier of the current screen configuration, for log correlation.
    pub fn session_id(&self) -> Uuid {
        self.state.lock().unwrap().session
    }

    pub fn phase(&self) -> EntryPhase {
        let state = self.state.lock().unwrap();
        if state.method.is_none() {
            EntryPhase::Idle
        } else if state.in_progress {
            EntryPhase::Submitting
        } else {
            EntryPhase::AwaitingInput
        }
    }

    /// Spawns the background task that drives the countdown.
    ///
    /// The task carries the session id of the `configure` call that
    /// spawned it and re-checks it under the state lock on every pass,
    /// standing down once a later `configure` has replaced the session.
    /// Ticks past zero are no-ops; the task ends when it is superseded,
    /// aborted or the controller is dropped.
    fn spawn_ticker(&mut self, session: Uuid) {
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        let tick_interval = self.config.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            // The first interval tick completes immediately; consume it so
            // the countdown loses its first second one full period in.
            interval.tick().await;
            loop {
                interval.tick().await;
                // Tick and send under one lock hold, matching `tick`.
                let mut state = state.lock().unwrap();
                match state.ticker_step(session) {
                    TickerStep::Updated(option) => {
                        let _ = events.send(CodeEntryEvent::NextOptionUpdated(option));
                    }
                    TickerStep::Unchanged => {}
                    TickerStep::Superseded => break,
                }
            }
        });
        self.ticker = Some(handle);
    }

    fn emit(&self, event: CodeEntryEvent) {
        // The receiver may already be gone; events are fire-and-forget.
        let _ = self.events.send(event);
    }
}

impl Drop for CodeEntryController {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}
