//! In-memory delivery log implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::DeliveryAttempt;

use super::DeliveryLog;

/// In-memory, append-only delivery log
///
/// Backed by an async `RwLock` over a map of request id to attempt rows, so
/// concurrent dispatches append without lost writes. Suitable for tests,
/// development, and single-process deployments; a durable implementation
/// would live in the infrastructure layer behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryDeliveryLog {
    attempts: RwLock<HashMap<Uuid, Vec<DeliveryAttempt>>>,
}

impl InMemoryDeliveryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded attempts across all requests
    pub async fn len(&self) -> usize {
        self.attempts.read().await.values().map(Vec::len).sum()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DeliveryLog for InMemoryDeliveryLog {
    async fn append(&self, attempt: DeliveryAttempt) {
        self.attempts
            .write()
            .await
            .entry(attempt.request_id)
            .or_default()
            .push(attempt);
    }

    async fn find_by_request(&self, request_id: Uuid) -> Vec<DeliveryAttempt> {
        self.attempts
            .read()
            .await
            .get(&request_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_append_and_lookup_preserves_order() {
        let log = InMemoryDeliveryLog::new();
        let request_id = Uuid::new_v4();

        log.append(DeliveryAttempt::failed(request_id, 1, "timeout")).await;
        log.append(DeliveryAttempt::failed(request_id, 2, "timeout")).await;
        log.append(DeliveryAttempt::sent(request_id, 3, "mock_1")).await;

        let attempts = log.find_by_request(request_id).await;
        assert_eq!(attempts.len(), 3);
        assert_eq!(
            attempts.iter().map(|a| a.attempt).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(attempts[2].is_sent());
    }

    #[tokio::test]
    async fn test_unknown_request_is_empty() {
        let log = InMemoryDeliveryLog::new();
        assert!(log.find_by_request(Uuid::new_v4()).await.is_empty());
        assert!(log.is_empty().await);
    }

    #[tokio::test]
    async fn test_concurrent_appends_lose_nothing() {
        let log = Arc::new(InMemoryDeliveryLog::new());
        let mut handles = Vec::new();

        for _ in 0..16 {
            let log = Arc::clone(&log);
            handles.push(tokio::spawn(async move {
                let request_id = Uuid::new_v4();
                for attempt in 1..=4 {
                    log.append(DeliveryAttempt::failed(request_id, attempt, "timeout"))
                        .await;
                }
                request_id
            }));
        }

        for handle in handles {
            let request_id = handle.await.unwrap();
            assert_eq!(log.find_by_request(request_id).await.len(), 4);
        }
        assert_eq!(log.len().await, 64);
    }
}
