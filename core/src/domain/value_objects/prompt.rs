//! Title and delivery prompt shown above the input field.
//!
//! Pure text selection per method. Wording lives here in one place so the
//! controller and any renderer agree on what the screen says.

use crate::domain::entities::method::VerificationMethod;

/// Title used before any method is known
pub const FALLBACK_TITLE: &str = "Check your messages";

/// Returns the screen title for the given method.
pub fn screen_title(method: &VerificationMethod) -> &'static str {
    match method {
        VerificationMethod::MissedCall { .. } => "Enter the missing digits",
        VerificationMethod::Email { .. } => "Check your email",
        VerificationMethod::Sms { .. } => "Enter code",
        _ => FALLBACK_TITLE,
    }
}

/// Returns the sentence describing where the code went.
///
/// `email` is the full login address when the account has one on record;
/// it takes precedence over the masked pattern carried by the method.
pub fn delivery_prompt(
    method: &VerificationMethod,
    phone_number: &str,
    email: Option<&str>,
) -> String {
    match method {
        VerificationMethod::Sms { .. } => {
            format!("We've sent an SMS with a code to {}.", phone_number)
        }
        VerificationMethod::Call { .. } => {
            format!("We're calling {} to dictate the code.", phone_number)
        }
        VerificationMethod::FlashCall => {
            format!("We're calling {} to verify your number.", phone_number)
        }
        VerificationMethod::MissedCall { .. } => format!(
            "We've sent a missed call to {}. Enter the missing digits of the calling number.",
            phone_number
        ),
        VerificationMethod::OtherSession { .. } => {
            "We've sent the code to the app on your other device.".to_string()
        }
        VerificationMethod::Email { pattern, .. } => {
            let shown = email.unwrap_or(pattern);
            format!("Please enter the code we emailed to {}.", shown)
        }
        VerificationMethod::EmailSetupRequired => {
            "Add a login email to receive your verification codes.".to_string()
        }
    }
}
