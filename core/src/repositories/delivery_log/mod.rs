//! Append-only delivery log for attempt records
//!
//! The dispatcher appends one record per attempt; audit and idempotency
//! checks read them back by request id. The trait exposes no mutation or
//! deletion, only append and lookup.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryDeliveryLog;
pub use r#trait::DeliveryLog;
