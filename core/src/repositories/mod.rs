//! Repository interfaces and in-crate implementations.

pub mod delivery_log;

pub use delivery_log::{DeliveryLog, InMemoryDeliveryLog};
