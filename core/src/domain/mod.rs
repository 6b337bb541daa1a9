//! Domain layer containing notification entities and value objects.

pub mod entities;
pub mod value_objects;

pub use entities::{
    DeliveryAttempt, DeliveryOutcome, NotificationKind, NotificationRequest,
};
pub use value_objects::{mask_phone_number, PhoneNumber};
