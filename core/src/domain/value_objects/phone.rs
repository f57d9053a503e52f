//! Log-safe representation of phone numbers.

/// Masks a phone number so only the last four characters survive.
///
/// Used everywhere a phone number would otherwise end up in logs.
pub fn mask_phone(phone: &str) -> String {
    // Cut on a char boundary; display-form numbers are not ASCII-only.
    match phone.char_indices().rev().nth(3) {
        Some((start, _)) if start > 0 => format!("****{}", &phone[start..]),
        _ => "****".to_string(),
    }
}
