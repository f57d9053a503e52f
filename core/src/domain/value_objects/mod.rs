//! Value objects representing immutable presentation state.

pub mod next_option;
pub mod phone;
pub mod prompt;

// Re-export commonly used types
pub use next_option::{format_countdown, NextOption};
pub use phone::mask_phone;
pub use prompt::{delivery_prompt, screen_title, FALLBACK_TITLE};
