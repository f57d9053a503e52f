//! Ticker-task tests using the paused tokio clock

use std::time::Duration;

use tokio::time::advance;

use crate::services::code_entry::{CodeEntryConfig, CodeEntryController, CodeEntryEvent};

use super::helpers::{drain, sms_params};

#[tokio::test(start_paused = true)]
async fn test_ticker_emits_one_update_per_second() {
    let (mut controller, mut rx) = CodeEntryController::new(CodeEntryConfig::default());
    controller.configure(sms_params(Some(2)));

    // Configure itself announces the initial option state.
    assert_eq!(drain(&mut rx).len(), 1);

    // Let the ticker task initialize its interval before advancing time.
    tokio::task::yield_now().await;

    advance(Duration::from_secs(1)).await;
    // Let the woken ticker task run before observing its effects.
    tokio::task::yield_now().await;
    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    assert_eq!(controller.remaining_seconds(), Some(1));

    advance(Duration::from_secs(1)).await;
    tokio::task::yield_now().await;
    let events = drain(&mut rx);
    match &events[..] {
        [CodeEntryEvent::NextOptionUpdated(option)] => {
            assert!(option.active);
            assert_eq!(option.label, "Call me instead");
        }
        other => panic!("Expected one NextOptionUpdated, got {:?}", other),
    }
    assert_eq!(controller.remaining_seconds(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_ticker_is_silent_past_zero() {
    let (mut controller, mut rx) = CodeEntryController::new(CodeEntryConfig::default());
    controller.configure(sms_params(Some(1)));
    tokio::task::yield_now().await;

    advance(Duration::from_secs(1)).await;
    tokio::task::yield_now().await;
    drain(&mut rx);

    // The task keeps running but ticks at zero change nothing.
    advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;
    assert_eq!(drain(&mut rx), vec![]);
    assert_eq!(controller.remaining_seconds(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_reconfigure_replaces_the_ticker() {
    let (mut controller, mut rx) = CodeEntryController::new(CodeEntryConfig::default());
    controller.configure(sms_params(Some(60)));
    tokio::task::yield_now().await;

    advance(Duration::from_secs(1)).await;
    tokio::task::yield_now().await;
    assert_eq!(controller.remaining_seconds(), Some(59));

    // A re-delivery replaces the countdown and its ticker wholesale.
    controller.configure(sms_params(Some(10)));
    tokio::task::yield_now().await;
    assert_eq!(controller.remaining_seconds(), Some(10));
    drain(&mut rx);

    // Exactly one update per second means the old ticker is gone.
    advance(Duration::from_secs(1)).await;
    tokio::task::yield_now().await;
    assert_eq!(drain(&mut rx).len(), 1);
    assert_eq!(controller.remaining_seconds(), Some(9));
}

#[tokio::test(start_paused = true)]
async fn test_configure_without_countdown_spawns_no_ticker() {
    let (mut controller, mut rx) = CodeEntryController::new(CodeEntryConfig::default());
    controller.configure(sms_params(None));
    tokio::task::yield_now().await;
    drain(&mut rx);

    advance(Duration::from_secs(10)).await;
    assert_eq!(drain(&mut rx), vec![]);
    assert_eq!(controller.remaining_seconds(), None);
}

#[tokio::test(start_paused = true)]
async fn test_manual_config_never_ticks_on_its_own() {
    let (mut controller, mut rx) = CodeEntryController::new(CodeEntryConfig::manual());
    controller.configure(sms_params(Some(5)));
    tokio::task::yield_now().await;
    drain(&mut rx);

    advance(Duration::from_secs(3)).await;
    assert_eq!(drain(&mut rx), vec![]);
    assert_eq!(controller.remaining_seconds(), Some(5));
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_the_ticker() {
    let (mut controller, mut rx) = CodeEntryController::new(CodeEntryConfig::default());
    controller.configure(sms_params(Some(30)));
    tokio::task::yield_now().await;
    drain(&mut rx);

    drop(controller);
    advance(Duration::from_secs(5)).await;

    assert_eq!(drain(&mut rx), vec![]);
}

#[tokio::test(start_paused = true)]
async fn test_faster_tick_interval_is_respected() {
    let config = CodeEntryConfig {
        tick_interval: Duration::from_millis(100),
        auto_tick: true,
    };
    let (mut controller, mut rx) = CodeEntryController::new(config);
    controller.configure(sms_params(Some(3)));
    tokio::task::yield_now().await;
    drain(&mut rx);

    advance(Duration::from_millis(300)).await;
    tokio::task::yield_now().await;

    assert_eq!(drain(&mut rx).len(), 3);
    assert_eq!(controller.remaining_seconds(), Some(0));
}
