//! # ToolHire Notification Core
//!
//! Core dispatch logic and domain layer for the ToolHire SMS notification
//! component. This crate contains the notification domain entities, business
//! services (message composition and delivery dispatch), the delivery log
//! repository interface, and the error taxonomy shared by all of them.
//!
//! Concrete SMS provider bindings live in the infrastructure layer and are
//! injected through the [`SmsProvider`](services::SmsProvider) trait.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
