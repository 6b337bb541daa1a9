//! Error families for the notification dispatch pipeline.
//!
//! Each stage of a dispatch owns one family: destination validation, message
//! composition, and the provider call. All of them surface as fields of a
//! [`DeliveryAttempt`](crate::domain::DeliveryAttempt) rather than as panics;
//! see the taxonomy notes on [`DispatchError`](super::DispatchError).

use thiserror::Error;

/// Destination validation errors
///
/// Always local and non-retryable: the dispatcher records a `Skipped` attempt
/// and never invokes the provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Destination phone number is empty")]
    EmptyInput,

    #[error("Invalid phone number format: {input}")]
    InvalidFormat {
        /// Masked form of the rejected input
        input: String,
    },
}

/// Message composition errors
///
/// Always local and non-retryable, surfaced as `Skipped` attempts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("Missing required parameter: {name}")]
    MissingParameter { name: String },

    #[error("Rendered message is {actual} characters, limit is {limit}")]
    MessageTooLong { limit: usize, actual: usize },
}

/// Errors reported by the external SMS provider
///
/// The transient/permanent split drives the retry policy: transient failures
/// are retried with backoff, permanent failures short-circuit immediately.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Transient provider failure: {message}")]
    Transient { message: String },

    #[error("Permanent provider failure: {message}")]
    Permanent { message: String },
}

impl ProviderError {
    /// Whether the dispatcher may retry after this error
    pub fn is_transient(&self) -> bool {
        matches!(self, ProviderError::Transient { .. })
    }
}
