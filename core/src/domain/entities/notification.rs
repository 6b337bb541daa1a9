//! Notification request entity and the enumeration of message kinds.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kinds of SMS notifications ToolHire sends
///
/// Each kind maps to a fixed message template in the composer; the required
/// template parameters are documented per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationKind {
    /// Rental is due back soon. Parameters: `toolName`, `returnDate`
    ReturnReminder,
    /// Rental is past its return date. Parameters: `toolName`, `daysOverdue`
    Overdue,
    /// Reserved tool is ready for pickup. Parameters: `toolName`, `pickupDate`
    Pickup,
    /// Rental request was approved. Parameters: `toolName`, `startDate`
    RentalApproved,
    /// Rental request was declined. Parameters: `toolName`, `reason`
    RentalRejected,
    /// Payment was received. Parameters: `toolName`, `amount`
    PaymentConfirmation,
    /// One-time login code. Parameters: `code`
    TwoFactorCode,
    /// Account security event. Parameters: `alertType`
    SecurityAlert,
}

impl NotificationKind {
    /// Stable name for log fields and serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::ReturnReminder => "return_reminder",
            NotificationKind::Overdue => "overdue",
            NotificationKind::Pickup => "pickup",
            NotificationKind::RentalApproved => "rental_approved",
            NotificationKind::RentalRejected => "rental_rejected",
            NotificationKind::PaymentConfirmation => "payment_confirmation",
            NotificationKind::TwoFactorCode => "two_factor_code",
            NotificationKind::SecurityAlert => "security_alert",
        }
    }

    /// Whether delivery of this kind is latency-sensitive
    ///
    /// Two-factor codes and security alerts lose their value quickly, so the
    /// dispatcher gives them a reduced retry budget rather than delivering a
    /// stale message late.
    pub fn is_latency_sensitive(&self) -> bool {
        matches!(
            self,
            NotificationKind::TwoFactorCode | NotificationKind::SecurityAlert
        )
    }
}

/// A single notification to be delivered to one destination
///
/// Immutable once constructed: the dispatcher reads it, renders it, and
/// records [`DeliveryAttempt`](super::DeliveryAttempt) rows against its `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    /// Unique identifier for this request, used to correlate delivery attempts
    pub id: Uuid,

    /// The kind of notification, selecting the message template
    pub kind: NotificationKind,

    /// Raw destination phone number as supplied by the caller
    ///
    /// Validation and normalization happen inside the dispatcher; invalid
    /// destinations surface as `Skipped` attempts, never as panics.
    pub destination: String,

    /// Template parameters by name
    pub parameters: HashMap<String, String>,

    /// Timestamp when the request was created
    pub created_at: DateTime<Utc>,
}

impl NotificationRequest {
    /// Create a new notification request with a fresh id
    pub fn new(
        kind: NotificationKind,
        destination: impl Into<String>,
        parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            destination: destination.into(),
            parameters,
            created_at: Utc::now(),
        }
    }

    /// Look up a template parameter by name
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_sensitive_kinds() {
        assert!(NotificationKind::TwoFactorCode.is_latency_sensitive());
        assert!(NotificationKind::SecurityAlert.is_latency_sensitive());
        assert!(!NotificationKind::ReturnReminder.is_latency_sensitive());
        assert!(!NotificationKind::PaymentConfirmation.is_latency_sensitive());
    }

    #[test]
    fn test_request_construction() {
        let mut params = HashMap::new();
        params.insert("code".to_string(), "482913".to_string());

        let request =
            NotificationRequest::new(NotificationKind::TwoFactorCode, "+15551234567", params);

        assert_eq!(request.kind, NotificationKind::TwoFactorCode);
        assert_eq!(request.destination, "+15551234567");
        assert_eq!(request.parameter("code"), Some("482913"));
        assert_eq!(request.parameter("missing"), None);
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let kinds = [
            NotificationKind::ReturnReminder,
            NotificationKind::Overdue,
            NotificationKind::Pickup,
            NotificationKind::RentalApproved,
            NotificationKind::RentalRejected,
            NotificationKind::PaymentConfirmation,
            NotificationKind::TwoFactorCode,
            NotificationKind::SecurityAlert,
        ];
        let names: std::collections::HashSet<_> = kinds.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), kinds.len());
    }
}
