//! Integration tests wiring the mock provider into the core dispatcher.

use std::collections::HashMap;
use std::sync::Arc;

use th_core::{
    DeliveryDispatcher, DeliveryLog, DeliveryOutcome, InMemoryDeliveryLog, NotificationKind,
};
use th_infra::config::SmsConfig;
use th_infra::sms::{create_sms_provider, FailureMode, MockSmsProvider};

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn factory_provider_delivers_through_dispatcher() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();

    let provider = create_sms_provider(&SmsConfig::default());
    let log = Arc::new(InMemoryDeliveryLog::new());
    let dispatcher = DeliveryDispatcher::new(provider, Arc::clone(&log));

    let attempt = dispatcher
        .send_notification(
            NotificationKind::RentalApproved,
            "+15551234567",
            params(&[("toolName", "Hammer Drill"), ("startDate", "2026-09-12")]),
            None,
        )
        .await;

    assert_eq!(attempt.outcome, DeliveryOutcome::Sent);
    assert!(attempt.message_id.unwrap().starts_with("mock_"));
    assert_eq!(log.find_by_request(attempt.request_id).await.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn permanent_mock_failure_surfaces_as_failed_attempt() {
    let provider = Arc::new(MockSmsProvider::with_options(false, FailureMode::Permanent));
    let log = Arc::new(InMemoryDeliveryLog::new());
    let dispatcher = DeliveryDispatcher::new(provider, Arc::clone(&log));

    let attempt = dispatcher
        .send_notification(
            NotificationKind::Overdue,
            "+15551234567",
            params(&[("toolName", "Jackhammer"), ("daysOverdue", "2")]),
            None,
        )
        .await;

    assert_eq!(attempt.outcome, DeliveryOutcome::Failed);
    assert_eq!(attempt.attempt, 1);
    assert!(attempt.error.unwrap().contains("carrier"));
}

#[tokio::test(start_paused = true)]
async fn transient_mock_failure_exhausts_retry_budget() {
    let provider = Arc::new(MockSmsProvider::with_options(false, FailureMode::Transient));
    let log = Arc::new(InMemoryDeliveryLog::new());
    let dispatcher = DeliveryDispatcher::new(provider.clone(), Arc::clone(&log));

    let attempt = dispatcher
        .send_notification(
            NotificationKind::ReturnReminder,
            "+15551234567",
            params(&[("toolName", "Auger"), ("returnDate", "2026-09-20")]),
            None,
        )
        .await;

    assert_eq!(attempt.outcome, DeliveryOutcome::Failed);
    assert_eq!(attempt.attempt, 3);
    assert_eq!(provider.message_count(), 0);
    assert_eq!(log.find_by_request(attempt.request_id).await.len(), 3);
}
