//! # Infrastructure Layer
//!
//! Concrete implementations behind the seams `th_core` defines: SMS provider
//! bindings and their configuration. The core dispatcher only ever sees the
//! [`SmsProvider`](th_core::SmsProvider) trait; this crate decides which
//! implementation to hand it.
//!
//! Real vendor gateways are wired in by the surrounding application; this
//! crate ships the mock provider used in development and tests, plus the
//! provider factory and environment-based configuration.

pub mod sms;

pub use sms::{create_sms_provider, MockSmsProvider};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// SMS provider error
    #[error("SMS provider error: {0}")]
    Sms(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

/// Configuration for infrastructure services
pub mod config {
    use serde::{Deserialize, Serialize};

    use crate::InfrastructureError;

    /// SMS provider configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct SmsConfig {
        /// SMS provider name ("mock"; vendor names reserved for app wiring)
        pub provider: String,
        /// Sender phone number
        pub from_number: String,
    }

    impl Default for SmsConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                from_number: "+15550100000".to_string(),
            }
        }
    }

    /// Load SMS configuration from the environment
    ///
    /// Reads `TH_SMS_PROVIDER` and `TH_SMS_FROM_NUMBER`, falling back to the
    /// defaults for anything unset. A `.env` file is honored when present.
    ///
    /// # Errors
    ///
    /// [`InfrastructureError::Config`] when the configured sender number does
    /// not pass phone validation.
    pub fn load_config() -> Result<SmsConfig, InfrastructureError> {
        dotenvy::dotenv().ok();

        let defaults = SmsConfig::default();
        let config = SmsConfig {
            provider: std::env::var("TH_SMS_PROVIDER").unwrap_or(defaults.provider),
            from_number: std::env::var("TH_SMS_FROM_NUMBER").unwrap_or(defaults.from_number),
        };

        th_core::PhoneNumber::parse(&config.from_number).map_err(|err| {
            InfrastructureError::Config(format!("invalid TH_SMS_FROM_NUMBER: {}", err))
        })?;

        Ok(config)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_default_config() {
            let config = SmsConfig::default();
            assert_eq!(config.provider, "mock");
            assert!(th_core::PhoneNumber::parse(&config.from_number).is_ok());
        }

        #[test]
        fn test_config_round_trips_as_json() {
            let config = SmsConfig::default();
            let json = serde_json::to_string(&config).unwrap();
            let parsed: SmsConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.provider, config.provider);
            assert_eq!(parsed.from_number, config.from_number);
        }
    }
}
