//! Capability trait for external SMS providers.

use async_trait::async_trait;

use crate::errors::ProviderError;

/// External SMS provider capability
///
/// Concrete bindings (a telecom gateway, a vendor API client, the mock
/// provider in the infrastructure crate) are injected by the surrounding
/// application. The dispatcher only sees this trait.
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send a message to a normalized E.164 phone number
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - provider-assigned identifier for the accepted message
    /// * `Err(ProviderError::Transient)` - retryable failure (timeout, rate limit)
    /// * `Err(ProviderError::Permanent)` - non-retryable rejection (bad destination)
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, ProviderError>;

    /// Name of the provider, for log fields
    fn provider_name(&self) -> &str;
}
