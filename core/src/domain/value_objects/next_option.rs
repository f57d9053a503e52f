//! Alternate-option control state and its label rules.
//!
//! The control under the input field has exactly one visual state for any
//! combination of current method, offered next method and countdown. It is
//! recomputed from scratch on every change rather than patched, so a
//! renderer can blindly overwrite its label and enabled flag.

use serde::{Deserialize, Serialize};

use crate::domain::entities::method::{NextMethod, VerificationMethod};

/// Rendered state of the alternate-option control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextOption {
    /// Text the control should display
    pub label: String,
    /// Whether the control currently reacts to activation
    pub active: bool,
}

/// Formats whole seconds as `m:ss`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl NextOption {
    /// Evaluates the control state for the given screen situation.
    ///
    /// While a next method is offered and the countdown has seconds left,
    /// the control shows a waiting label and stays inert. Once nothing
    /// gates it, because the countdown elapsed or none was configured, the
    /// control activates with the resend action for the offered channel.
    /// Without a next method the control becomes a generic help affordance
    /// instead.
    pub fn evaluate(
        current: &VerificationMethod,
        next: Option<NextMethod>,
        remaining: Option<u32>,
    ) -> NextOption {
        match next {
            Some(method) => {
                let pending = remaining.unwrap_or(0);
                if pending > 0 {
                    NextOption {
                        label: waiting_label(method, pending),
                        active: false,
                    }
                } else {
                    NextOption {
                        label: ready_label(method).to_string(),
                        active: true,
                    }
                }
            }
            None => {
                let label = if current.is_email() {
                    "Didn't get the email?"
                } else {
                    "Didn't get the code?"
                };
                NextOption {
                    label: label.to_string(),
                    active: true,
                }
            }
        }
    }
}

fn waiting_label(method: NextMethod, remaining: u32) -> String {
    let timer = format_countdown(remaining);
    match method {
        NextMethod::Sms => format!("We can send you an SMS in {}", timer),
        NextMethod::Call | NextMethod::FlashCall => format!("We will call you in {}", timer),
        NextMethod::MissedCall => format!("We will send a missed call in {}", timer),
    }
}

fn ready_label(method: NextMethod) -> &'static str {
    match method {
        NextMethod::Sms => "Send the code as an SMS",
        NextMethod::Call => "Call me instead",
        NextMethod::FlashCall => "Request a call",
        NextMethod::MissedCall => "Send a missed call",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sms_method() -> VerificationMethod {
        VerificationMethod::Sms { length: 5 }
    }

    #[test]
    fn test_format_countdown_pads_seconds() {
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(60), "1:00");
        assert_eq!(format_countdown(125), "2:05");
    }

    #[test]
    fn test_pending_countdown_keeps_option_inert() {
        let option = NextOption::evaluate(&sms_method(), Some(NextMethod::Call), Some(65));

        assert!(!option.active);
        assert_eq!(option.label, "We will call you in 1:05");
    }

    #[test]
    fn test_elapsed_countdown_activates_option() {
        let option = NextOption::evaluate(&sms_method(), Some(NextMethod::Call), Some(0));

        assert!(option.active);
        assert_eq!(option.label, "Call me instead");
    }

    #[test]
    fn test_missing_countdown_activates_option_immediately() {
        let option = NextOption::evaluate(&sms_method(), Some(NextMethod::Sms), None);

        assert!(option.active);
        assert_eq!(option.label, "Send the code as an SMS");
    }

    #[test]
    fn test_no_next_method_offers_help_affordance() {
        // The countdown is irrelevant when there is nothing to fall back to.
        let option = NextOption::evaluate(&sms_method(), None, Some(30));

        assert!(option.active);
        assert_eq!(option.label, "Didn't get the code?");
    }

    #[test]
    fn test_email_methods_get_email_help_label() {
        let email = VerificationMethod::Email {
            pattern: "a***@b.com".to_string(),
            length: 6,
        };
        let option = NextOption::evaluate(&email, None, None);

        assert_eq!(option.label, "Didn't get the email?");
    }

    #[test]
    fn test_waiting_labels_per_channel() {
        let m = sms_method();
        assert_eq!(
            NextOption::evaluate(&m, Some(NextMethod::Sms), Some(30)).label,
            "We can send you an SMS in 0:30"
        );
        assert_eq!(
            NextOption::evaluate(&m, Some(NextMethod::FlashCall), Some(30)).label,
            "We will call you in 0:30"
        );
        assert_eq!(
            NextOption::evaluate(&m, Some(NextMethod::MissedCall), Some(30)).label,
            "We will send a missed call in 0:30"
        );
    }
}
