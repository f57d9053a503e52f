//! Example driving the code-entry controller the way a host app would
//!
//! This example plays both sides of the contract: it feeds user actions
//! into the controller and renders the event stream a real screen would
//! consume, including the live countdown on the alternate option.
//!
//! Run with: cargo run --example screen_driver

use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use oe_core::domain::entities::method::{NextMethod, VerificationMethod};
use oe_core::services::code_entry::{
    CodeEntryConfig, CodeEntryController, CodeEntryEvent, CodeEntryParams,
};

/// Prints everything the controller has emitted since the last call.
fn render_events(rx: &mut UnboundedReceiver<CodeEntryEvent>) {
    while let Ok(event) = rx.try_recv() {
        match event {
            CodeEntryEvent::CodeComplete { code } => {
                println!("  [screen] code complete, submitting {:?}", code);
            }
            CodeEntryEvent::AlternateRequested => {
                println!("  [screen] asking the server for the alternate delivery");
            }
            CodeEntryEvent::InputEnabledChanged { enabled } => {
                println!("  [screen] continue button enabled: {}", enabled);
            }
            CodeEntryEvent::NextOptionUpdated(option) => {
                println!(
                    "  [screen] option: {:?} (active: {})",
                    option.label, option.active
                );
            }
            CodeEntryEvent::AnimateError { message } => {
                println!("  [screen] shake animation, message: {:?}", message);
            }
            CodeEntryEvent::AnimateSuccess => {
                println!("  [screen] success animation");
            }
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Code Entry Screen Demo ===\n");

    let (mut controller, mut rx) = CodeEntryController::new(CodeEntryConfig::default());

    // The server sent an SMS; a flash call unlocks three seconds later
    println!("Configuring screen for SMS delivery...");
    controller.configure(
        CodeEntryParams::new("+61412345678", VerificationMethod::Sms { length: 5 })
            .with_next_method(NextMethod::FlashCall, Some(3)),
    );

    println!("✓ Title:  {}", controller.screen_title());
    println!("✓ Prompt: {}", controller.delivery_prompt().unwrap_or_default());
    render_events(&mut rx);

    // Demo: partial input enables the continue button
    println!("\n--- Typing the first two digits ---");
    controller.set_code("12");
    render_events(&mut rx);

    // Demo: the countdown ticks down and unlocks the alternate option
    println!("\n--- Waiting for the resend countdown ---");
    tokio::time::sleep(Duration::from_millis(3500)).await;
    render_events(&mut rx);

    match controller.request_alternate_option() {
        Ok(()) => println!("✓ Alternate option accepted"),
        Err(e) => println!("✗ Alternate option rejected: {}", e),
    }
    render_events(&mut rx);

    // The server answers with a voice-call delivery
    println!("\n--- Reconfiguring for the voice call ---");
    controller.configure(CodeEntryParams::new(
        "+61412345678",
        VerificationMethod::Call { length: 6 },
    ));
    println!("✓ Prompt: {}", controller.delivery_prompt().unwrap_or_default());
    render_events(&mut rx);

    // Demo: a wrong code comes back rejected
    println!("\n--- Entering a wrong code ---");
    controller.set_code("000000");
    render_events(&mut rx);

    println!("(upstream verification rejects it)");
    controller.set_in_progress(false);
    controller.animate_error(Some("Invalid code, please try again".to_string()));
    controller.reset_code();
    render_events(&mut rx);

    // Demo: the corrected code goes through
    println!("\n--- Entering the correct code ---");
    controller.set_code("123456");
    render_events(&mut rx);

    println!("(upstream verification accepts it)");
    controller.animate_success();
    render_events(&mut rx);

    println!("\n=== Demo completed successfully ===");
}
