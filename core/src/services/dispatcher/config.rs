//! Retry and backoff policy for the delivery dispatcher.

use std::time::Duration;

use crate::domain::NotificationKind;

/// Retry and backoff configuration
///
/// All thresholds are policy, not fixed requirements; the defaults match the
/// standard ToolHire delivery profile.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Maximum provider tries per request (first attempt included)
    pub max_attempts: u32,
    /// Maximum provider tries for latency-sensitive kinds (one retry by
    /// default, so stale two-factor codes are not delivered late)
    pub urgent_max_attempts: u32,
    /// Base backoff delay in milliseconds for the first retry
    pub base_backoff_ms: u64,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Maximum single backoff delay in milliseconds
    pub max_backoff_ms: u64,
    /// Maximum cumulative backoff wait per send, in milliseconds
    pub max_total_backoff_ms: u64,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            urgent_max_attempts: 2,
            base_backoff_ms: 500,         // 500ms base delay
            backoff_multiplier: 2.0,      // Double each time
            max_backoff_ms: 10_000,       // 10 seconds max per wait
            max_total_backoff_ms: 30_000, // 30 seconds max total wait
        }
    }
}

impl DispatcherConfig {
    /// Provider try budget for a notification kind
    pub fn attempt_budget(&self, kind: NotificationKind) -> u32 {
        if kind.is_latency_sensitive() {
            self.urgent_max_attempts
        } else {
            self.max_attempts
        }
    }

    /// Backoff delay before the retry following the given failed attempt
    /// (1-based), exponential and capped
    pub fn backoff_delay(&self, failed_attempt: u32) -> Duration {
        let exponent = failed_attempt.saturating_sub(1) as f64;
        let delay_ms = (self.base_backoff_ms as f64) * self.backoff_multiplier.powf(exponent);
        Duration::from_millis(delay_ms.min(self.max_backoff_ms as f64) as u64)
    }
}
