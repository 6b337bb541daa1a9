//! Delivery log trait defining the interface for attempt persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DeliveryAttempt;

/// Append-only store of delivery attempt records
///
/// Implementations must support concurrent appends without losing writes and
/// must preserve per-request insertion order, so attempts for one request
/// read back strictly ordered by attempt number. Append is infallible at the
/// interface level: the dispatcher records outcomes on every path and must
/// never turn a bookkeeping problem into a delivery crash, so a durable
/// implementation wraps its own backend failures internally.
#[async_trait]
pub trait DeliveryLog: Send + Sync {
    /// Append one attempt record
    async fn append(&self, attempt: DeliveryAttempt);

    /// All recorded attempts for a request, in append order
    ///
    /// Returns an empty vector for unknown request ids.
    async fn find_by_request(&self, request_id: Uuid) -> Vec<DeliveryAttempt>;
}
