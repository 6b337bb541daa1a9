//! Delivery attempt records produced by the dispatcher.
//!
//! One [`DeliveryAttempt`] is appended to the delivery log per provider try
//! (and per precondition failure), so a single request can own several rows.
//! Records are append-only and never mutated after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Final disposition of a single delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryOutcome {
    /// The provider accepted the message
    Sent,
    /// The provider rejected the message, or the retry budget ran out
    Failed,
    /// A local precondition failed (validation or composition); the provider
    /// was never invoked
    Skipped,
    /// The caller-supplied deadline expired before delivery completed
    Cancelled,
}

/// A single recorded attempt to deliver one notification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAttempt {
    /// Id of the request this attempt belongs to
    pub request_id: Uuid,

    /// 1-based attempt number within the request
    pub attempt: u32,

    /// How the attempt ended
    pub outcome: DeliveryOutcome,

    /// Error detail for non-`Sent` outcomes
    pub error: Option<String>,

    /// Provider message id, present only for `Sent`
    pub message_id: Option<String>,

    /// When the attempt was recorded
    pub timestamp: DateTime<Utc>,
}

impl DeliveryAttempt {
    /// Record a successful delivery
    pub fn sent(request_id: Uuid, attempt: u32, message_id: impl Into<String>) -> Self {
        Self {
            request_id,
            attempt,
            outcome: DeliveryOutcome::Sent,
            error: None,
            message_id: Some(message_id.into()),
            timestamp: Utc::now(),
        }
    }

    /// Record a provider failure (permanent, or transient with no budget left)
    pub fn failed(request_id: Uuid, attempt: u32, error: impl Into<String>) -> Self {
        Self {
            request_id,
            attempt,
            outcome: DeliveryOutcome::Failed,
            error: Some(error.into()),
            message_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Record a local precondition failure; the provider was not called
    pub fn skipped(request_id: Uuid, attempt: u32, error: impl Into<String>) -> Self {
        Self {
            request_id,
            attempt,
            outcome: DeliveryOutcome::Skipped,
            error: Some(error.into()),
            message_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Record a deadline expiry
    pub fn cancelled(request_id: Uuid, attempt: u32, error: impl Into<String>) -> Self {
        Self {
            request_id,
            attempt,
            outcome: DeliveryOutcome::Cancelled,
            error: Some(error.into()),
            message_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Whether the message was accepted by the provider
    pub fn is_sent(&self) -> bool {
        self.outcome == DeliveryOutcome::Sent
    }

    /// Whether the provider was never invoked for this attempt
    pub fn is_skipped(&self) -> bool {
        self.outcome == DeliveryOutcome::Skipped
    }
}
