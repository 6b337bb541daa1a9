//! Domain entities for the notification dispatch core.

pub mod delivery_attempt;
pub mod notification;

pub use delivery_attempt::{DeliveryAttempt, DeliveryOutcome};
pub use notification::{NotificationKind, NotificationRequest};
