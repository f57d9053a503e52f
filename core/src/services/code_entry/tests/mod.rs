//! Tests for the code-entry controller

#[cfg(test)]
mod helpers;
#[cfg(test)]
mod ticker_tests;
