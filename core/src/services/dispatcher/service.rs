//! Main delivery dispatcher implementation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::time::{self, Instant};
use tracing::{info, warn};

use crate::domain::value_objects::mask_phone_number;
use crate::domain::{
    DeliveryAttempt, NotificationKind, NotificationRequest, PhoneNumber,
};
use crate::errors::{DispatchError, ProviderError};
use crate::repositories::DeliveryLog;
use crate::services::composer::MessageComposer;

use super::config::DispatcherConfig;
use super::traits::SmsProvider;

/// Orchestrates validation, composition, provider calls and retry for one
/// notification at a time
///
/// Every call records its outcome in the delivery log before returning, and
/// no provider failure ever surfaces as an `Err`: the returned
/// [`DeliveryAttempt`] carries the outcome. Safe to call concurrently; the
/// only shared state is the append-only log.
pub struct DeliveryDispatcher<P, L>
where
    P: SmsProvider + ?Sized,
    L: DeliveryLog + ?Sized,
{
    /// External SMS provider capability
    provider: Arc<P>,
    /// Append-only record of delivery attempts
    delivery_log: Arc<L>,
    /// Message composer for template rendering
    composer: MessageComposer,
    /// Retry and backoff policy
    config: DispatcherConfig,
}

impl<P, L> DeliveryDispatcher<P, L>
where
    P: SmsProvider + ?Sized,
    L: DeliveryLog + ?Sized,
{
    /// Create a dispatcher with default composition and retry policy
    pub fn new(provider: Arc<P>, delivery_log: Arc<L>) -> Self {
        Self::with_config(provider, delivery_log, MessageComposer::new(), DispatcherConfig::default())
    }

    /// Create a dispatcher with explicit composer and policy
    pub fn with_config(
        provider: Arc<P>,
        delivery_log: Arc<L>,
        composer: MessageComposer,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            provider,
            delivery_log,
            composer,
            config,
        }
    }

    /// Dispatch a notification request
    ///
    /// Validates the destination, renders the message, then calls the
    /// provider with bounded exponential backoff on transient failures.
    /// The final attempt record is returned; intermediate transient failures
    /// are also recorded, one row per try.
    pub async fn send(&self, request: &NotificationRequest) -> DeliveryAttempt {
        self.dispatch(request, None).await
    }

    /// Dispatch with a caller-supplied deadline
    ///
    /// When the timeout expires before delivery completes, pending retries
    /// are abandoned and a `Cancelled` attempt is recorded and returned
    /// instead of hanging.
    pub async fn send_with_timeout(
        &self,
        request: &NotificationRequest,
        timeout: Duration,
    ) -> DeliveryAttempt {
        self.dispatch(request, Some(Instant::now() + timeout)).await
    }

    /// Caller-facing convenience: build the request and dispatch it
    pub async fn send_notification(
        &self,
        kind: NotificationKind,
        destination: &str,
        parameters: HashMap<String, String>,
        timeout: Option<Duration>,
    ) -> DeliveryAttempt {
        let request = NotificationRequest::new(kind, destination, parameters);
        match timeout {
            Some(timeout) => self.send_with_timeout(&request, timeout).await,
            None => self.send(&request).await,
        }
    }

    async fn dispatch(
        &self,
        request: &NotificationRequest,
        deadline: Option<Instant>,
    ) -> DeliveryAttempt {
        // Step 1: destination validation. Failures are local preconditions,
        // recorded as Skipped without touching the provider.
        let phone = match PhoneNumber::parse(&request.destination) {
            Ok(phone) => phone,
            Err(err) => {
                warn!(
                    request_id = %request.id,
                    kind = request.kind.as_str(),
                    phone = %mask_phone_number(&request.destination),
                    error = %err,
                    event = "destination_rejected",
                    "Skipping notification with invalid destination"
                );
                return self
                    .record(DeliveryAttempt::skipped(request.id, 1, err.to_string()))
                    .await;
            }
        };

        // Step 2: message composition, same Skipped treatment.
        let message = match self.composer.render(request.kind, &request.parameters) {
            Ok(message) => message,
            Err(err) => {
                warn!(
                    request_id = %request.id,
                    kind = request.kind.as_str(),
                    phone = %phone.masked(),
                    error = %err,
                    event = "composition_failed",
                    "Skipping notification that failed to render"
                );
                return self
                    .record(DeliveryAttempt::skipped(request.id, 1, err.to_string()))
                    .await;
            }
        };

        // Step 3: provider loop with bounded retry.
        let budget = self.config.attempt_budget(request.kind);
        let mut total_backoff = Duration::ZERO;
        let mut attempt_number: u32 = 1;

        loop {
            let call = self.provider.send_sms(phone.as_str(), &message.text);
            let result = match deadline {
                Some(deadline) => match time::timeout_at(deadline, call).await {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(
                            request_id = %request.id,
                            kind = request.kind.as_str(),
                            phone = %phone.masked(),
                            attempt = attempt_number,
                            event = "dispatch_cancelled",
                            "Deadline expired during provider call"
                        );
                        return self
                            .record(DeliveryAttempt::cancelled(
                                request.id,
                                attempt_number,
                                DispatchError::Cancelled.to_string(),
                            ))
                            .await;
                    }
                },
                None => call.await,
            };

            match result {
                Ok(message_id) => {
                    info!(
                        request_id = %request.id,
                        kind = request.kind.as_str(),
                        phone = %phone.masked(),
                        provider = self.provider.provider_name(),
                        message_id = %message_id,
                        attempt = attempt_number,
                        event = "notification_sent",
                        "Notification delivered"
                    );
                    return self
                        .record(DeliveryAttempt::sent(request.id, attempt_number, message_id))
                        .await;
                }
                Err(err @ ProviderError::Permanent { .. }) => {
                    warn!(
                        request_id = %request.id,
                        kind = request.kind.as_str(),
                        phone = %phone.masked(),
                        provider = self.provider.provider_name(),
                        attempt = attempt_number,
                        error = %err,
                        event = "delivery_failed",
                        "Permanent provider failure, not retrying"
                    );
                    return self
                        .record(DeliveryAttempt::failed(request.id, attempt_number, err.to_string()))
                        .await;
                }
                Err(err @ ProviderError::Transient { .. }) => {
                    warn!(
                        request_id = %request.id,
                        kind = request.kind.as_str(),
                        phone = %phone.masked(),
                        provider = self.provider.provider_name(),
                        attempt = attempt_number,
                        budget = budget,
                        error = %err,
                        event = "delivery_attempt_failed",
                        "Transient provider failure"
                    );
                    let last = self
                        .record(DeliveryAttempt::failed(request.id, attempt_number, err.to_string()))
                        .await;

                    if attempt_number >= budget {
                        return last;
                    }

                    let delay = self.backoff_with_jitter(attempt_number);
                    if total_backoff + delay
                        > Duration::from_millis(self.config.max_total_backoff_ms)
                    {
                        // Backoff budget exhausted; the last failure stands.
                        return last;
                    }
                    if let Some(deadline) = deadline {
                        if Instant::now() + delay >= deadline {
                            return self
                                .record(DeliveryAttempt::cancelled(
                                    request.id,
                                    attempt_number + 1,
                                    DispatchError::Cancelled.to_string(),
                                ))
                                .await;
                        }
                    }

                    total_backoff += delay;
                    time::sleep(delay).await;
                    attempt_number += 1;
                }
            }
        }
    }

    /// Exponential backoff with up to 10% random jitter
    fn backoff_with_jitter(&self, failed_attempt: u32) -> Duration {
        let base = self.config.backoff_delay(failed_attempt);
        let jitter_cap = (base.as_millis() as u64) / 10;
        let jitter = if jitter_cap == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=jitter_cap)
        };
        base + Duration::from_millis(jitter)
    }

    /// Append an attempt to the delivery log, then hand it back to the caller
    async fn record(&self, attempt: DeliveryAttempt) -> DeliveryAttempt {
        self.delivery_log.append(attempt.clone()).await;
        attempt
    }
}
