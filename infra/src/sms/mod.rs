//! SMS provider implementations
//!
//! Everything here implements the [`SmsProvider`](th_core::SmsProvider)
//! capability trait from the core crate. Currently ships:
//!
//! - **Mock provider**: console output and structured logging for development
//!
//! Vendor gateways (Twilio and the like) are deliberately not implemented in
//! this component; the application injects its own binding through the same
//! trait.

pub mod mock_sms;

pub use mock_sms::{FailureMode, MockSmsProvider};

use std::sync::Arc;

use th_core::SmsProvider;

use crate::config::SmsConfig;

/// Create an SMS provider from configuration
///
/// Unknown provider names fall back to the mock implementation with a
/// warning, so a misconfigured environment degrades to console delivery
/// rather than failing startup.
pub fn create_sms_provider(config: &SmsConfig) -> Arc<dyn SmsProvider> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockSmsProvider::new()),
        other => {
            tracing::warn!(
                provider = other,
                "Unknown SMS provider, using mock implementation"
            );
            Arc::new(MockSmsProvider::new())
        }
    }
}
