//! Business services for message composition and delivery dispatch.

pub mod composer;
pub mod dispatcher;

// Re-export commonly used types
pub use composer::{MessageComposer, RenderedMessage, DEFAULT_SEGMENT_LIMIT};
pub use dispatcher::{DeliveryDispatcher, DispatcherConfig, SmsProvider};
