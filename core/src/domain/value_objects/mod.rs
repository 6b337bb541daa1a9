//! Value objects for the notification domain.

pub mod phone_number;

pub use phone_number::{mask_phone_number, PhoneNumber};
