//! Mock SMS provider implementation
//!
//! A mock implementation of the core `SmsProvider` capability for development
//! and testing. Messages are printed to the console instead of being sent;
//! failure simulation exercises the dispatcher's transient/permanent retry
//! handling.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use th_core::{mask_phone_number, ProviderError, SmsProvider};

/// Which kind of failure the mock should simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Accept every message
    None,
    /// Report a retryable failure on every call
    Transient,
    /// Report a non-retryable failure on every call
    Permanent,
}

/// Mock SMS provider for development and testing
///
/// This implementation:
/// - Logs messages to the console instead of sending them
/// - Generates mock message ids
/// - Tracks a message counter for assertions
/// - Optionally simulates transient or permanent failures
#[derive(Clone)]
pub struct MockSmsProvider {
    /// Counter for messages accepted by the mock
    message_count: Arc<AtomicU64>,
    /// Failure simulation mode
    failure_mode: FailureMode,
    /// Whether to print messages to the console
    console_output: bool,
}

impl MockSmsProvider {
    /// Create a mock provider that accepts everything and prints to console
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            failure_mode: FailureMode::None,
            console_output: true,
        }
    }

    /// Create a mock provider with explicit options
    pub fn with_options(console_output: bool, failure_mode: FailureMode) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            failure_mode,
            console_output,
        }
    }

    /// Number of messages the mock has accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockSmsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, ProviderError> {
        let masked_phone = mask_phone_number(phone_number);

        match self.failure_mode {
            FailureMode::Transient => {
                warn!(
                    provider = "mock",
                    phone = %masked_phone,
                    "Mock provider simulating transient failure"
                );
                return Err(ProviderError::Transient {
                    message: "Simulated network timeout".to_string(),
                });
            }
            FailureMode::Permanent => {
                warn!(
                    provider = "mock",
                    phone = %masked_phone,
                    "Mock provider simulating permanent failure"
                );
                return Err(ProviderError::Permanent {
                    message: "Simulated carrier rejection".to_string(),
                });
            }
            FailureMode::None => {}
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            // Console output for development - show full message
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS PROVIDER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", phone_number);
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "sms_provider",
            provider = "mock",
            phone = %masked_phone,
            message_id = %message_id,
            message_length = message.len(),
            "SMS accepted (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_success() {
        let provider = MockSmsProvider::with_options(false, FailureMode::None);
        let result = provider.send_sms("+15551234567", "Test message").await;

        let message_id = result.unwrap();
        assert!(message_id.starts_with("mock_"));
        assert_eq!(provider.message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_transient_failure() {
        let provider = MockSmsProvider::with_options(false, FailureMode::Transient);
        let result = provider.send_sms("+15551234567", "Test message").await;

        match result {
            Err(ProviderError::Transient { message }) => {
                assert!(message.contains("timeout"));
            }
            other => panic!("Expected transient error, got {:?}", other),
        }
        assert_eq!(provider.message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_permanent_failure() {
        let provider = MockSmsProvider::with_options(false, FailureMode::Permanent);
        let result = provider.send_sms("+15551234567", "Test message").await;

        assert!(matches!(result, Err(ProviderError::Permanent { .. })));
    }

    #[tokio::test]
    async fn test_mock_counter() {
        let provider = MockSmsProvider::with_options(false, FailureMode::None);

        for i in 1..=3 {
            let _ = provider.send_sms("+15551234567", &format!("Message {}", i)).await;
            assert_eq!(provider.message_count(), i);
        }

        provider.reset_counter();
        assert_eq!(provider.message_count(), 0);
    }

    #[test]
    fn test_provider_name() {
        let provider = MockSmsProvider::new();
        assert_eq!(provider.provider_name(), "Mock");
    }
}
