//! Verification method variants and the successor-method set.
//!
//! A [`VerificationMethod`] describes how the one-time code currently on
//! screen was delivered and therefore how many digits the user is expected
//! to type. A [`NextMethod`] names the fallback channel the server offers
//! for the case where the current delivery never arrives.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Code length assumed before any method has been configured
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// The channel through which the current one-time code was delivered.
///
/// Variants carry the expected code length where the server supplies one;
/// flash-call and email-setup codes are fixed at [`DEFAULT_CODE_LENGTH`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationMethod {
    /// Code sent in a text message
    Sms { length: usize },
    /// Code dictated over a voice call
    Call { length: usize },
    /// Code is the tail of the number that places a missed call; `prefix`
    /// is the known leading part of that number
    MissedCall { prefix: String, length: usize },
    /// Code delivered to another active session of the same account
    OtherSession { length: usize },
    /// Code mailed to the address matching `pattern` (a masked display form)
    Email { pattern: String, length: usize },
    /// Code conveyed by the caller id of a flash call
    FlashCall,
    /// Code entered while attaching a login email to the account
    EmailSetupRequired,
}

impl VerificationMethod {
    /// Returns the number of digits a complete code has for this method.
    pub fn expected_len(&self) -> usize {
        match self {
            VerificationMethod::Sms { length }
            | VerificationMethod::Call { length }
            | VerificationMethod::MissedCall { length, .. }
            | VerificationMethod::OtherSession { length }
            | VerificationMethod::Email { length, .. } => *length,
            VerificationMethod::FlashCall | VerificationMethod::EmailSetupRequired => {
                DEFAULT_CODE_LENGTH
            }
        }
    }

    /// Returns the static prefix shown ahead of the input field.
    ///
    /// Only missed-call verification has one: the known leading part of
    /// the calling number, normalized to start with `+`.
    pub fn code_prefix(&self) -> Option<String> {
        match self {
            VerificationMethod::MissedCall { prefix, .. } => {
                if prefix.starts_with('+') {
                    Some(prefix.clone())
                } else {
                    Some(format!("+{}", prefix))
                }
            }
            _ => None,
        }
    }

    /// Returns true for the email-delivery variants.
    pub fn is_email(&self) -> bool {
        matches!(
            self,
            VerificationMethod::Email { .. } | VerificationMethod::EmailSetupRequired
        )
    }
}

impl fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerificationMethod::Sms { .. } => "sms",
            VerificationMethod::Call { .. } => "call",
            VerificationMethod::MissedCall { .. } => "missed_call",
            VerificationMethod::OtherSession { .. } => "other_session",
            VerificationMethod::Email { .. } => "email",
            VerificationMethod::FlashCall => "flash_call",
            VerificationMethod::EmailSetupRequired => "email_setup",
        };
        write!(f, "{}", name)
    }
}

/// The delivery channel offered as a fallback once the countdown allows it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextMethod {
    Sms,
    Call,
    FlashCall,
    MissedCall,
}

impl fmt::Display for NextMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NextMethod::Sms => "sms",
            NextMethod::Call => "call",
            NextMethod::FlashCall => "flash_call",
            NextMethod::MissedCall => "missed_call",
        };
        write!(f, "{}", name)
    }
}
