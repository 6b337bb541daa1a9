//! Delivery dispatch service for SMS notifications
//!
//! This module orchestrates the full dispatch pipeline:
//! - Destination validation and normalization
//! - Message composition from the notification kind and parameters
//! - Provider invocation with bounded exponential backoff on transient errors
//! - Deadline enforcement for caller-supplied timeouts
//! - Append-only recording of every attempt in the delivery log
//!
//! Failures never escape as errors: every call returns a typed
//! [`DeliveryAttempt`](crate::domain::DeliveryAttempt) and the caller decides
//! what to do with the outcome.

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::DispatcherConfig;
pub use service::DeliveryDispatcher;
pub use traits::SmsProvider;
