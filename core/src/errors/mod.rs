//! Error taxonomy for notification dispatch.

mod types;

// Re-export all error families
pub use types::{CompositionError, ProviderError, ValidationError};

use thiserror::Error;

/// Top-level dispatch error
///
/// No variant here is fatal to the process:
/// [`DeliveryDispatcher::send`](crate::services::DeliveryDispatcher::send)
/// converts every one of these into a typed `DeliveryAttempt` outcome instead
/// of returning `Err`, so callers inspect outcomes without exception-style
/// handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Composition(#[from] CompositionError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Dispatch cancelled: deadline expired")]
    Cancelled,
}
