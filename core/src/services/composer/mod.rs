//! Message composition for notification kinds.
//!
//! Maps each [`NotificationKind`](crate::domain::NotificationKind) to a fixed
//! ToolHire template, checks required parameters, and enforces the provider
//! segment limit. Rendering is pure and deterministic.

mod service;

pub use service::{MessageComposer, RenderedMessage, DEFAULT_SEGMENT_LIMIT};
