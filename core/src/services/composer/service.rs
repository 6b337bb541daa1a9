//! Template rendering for each notification kind.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::NotificationKind;
use crate::errors::CompositionError;

/// Default maximum message length in characters (one GSM-7 segment)
pub const DEFAULT_SEGMENT_LIMIT: usize = 160;

/// A rendered, length-checked message ready for the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// The kind this message was rendered from
    pub kind: NotificationKind,
    /// Final message text, at most the composer's segment limit
    pub text: String,
}

/// Renders notification kinds into final SMS text
///
/// Pure and deterministic: the same `(kind, parameters)` pair always renders
/// to identical text. The segment limit is policy, not a constant; override
/// it with [`MessageComposer::with_segment_limit`] when the provider allows
/// longer messages.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    segment_limit: usize,
}

impl MessageComposer {
    /// Create a composer with the default single-segment limit
    pub fn new() -> Self {
        Self {
            segment_limit: DEFAULT_SEGMENT_LIMIT,
        }
    }

    /// Create a composer with a custom segment limit
    pub fn with_segment_limit(segment_limit: usize) -> Self {
        Self { segment_limit }
    }

    /// Render a notification into final message text
    ///
    /// # Errors
    ///
    /// * [`CompositionError::MissingParameter`] - a required template
    ///   parameter is absent (checked in template order)
    /// * [`CompositionError::MessageTooLong`] - the rendered text exceeds the
    ///   segment limit
    pub fn render(
        &self,
        kind: NotificationKind,
        parameters: &HashMap<String, String>,
    ) -> Result<RenderedMessage, CompositionError> {
        let text = match kind {
            NotificationKind::ReturnReminder => {
                let tool = require(parameters, "toolName")?;
                let date = require(parameters, "returnDate")?;
                format!(
                    "ToolHire reminder: {} is due back on {}. Please return it on time to avoid late fees.",
                    tool,
                    format_date(date)
                )
            }
            NotificationKind::Overdue => {
                let tool = require(parameters, "toolName")?;
                let days = require(parameters, "daysOverdue")?;
                format!(
                    "ToolHire notice: {} is {} {} overdue. Please return it as soon as possible.",
                    tool,
                    days,
                    if days == "1" { "day" } else { "days" }
                )
            }
            NotificationKind::Pickup => {
                let tool = require(parameters, "toolName")?;
                let date = require(parameters, "pickupDate")?;
                format!(
                    "ToolHire: {} is ready for pickup on {}. See you soon!",
                    tool,
                    format_date(date)
                )
            }
            NotificationKind::RentalApproved => {
                let tool = require(parameters, "toolName")?;
                let date = require(parameters, "startDate")?;
                format!(
                    "ToolHire: your rental of {} is approved and starts on {}.",
                    tool,
                    format_date(date)
                )
            }
            NotificationKind::RentalRejected => {
                let tool = require(parameters, "toolName")?;
                let reason = require(parameters, "reason")?;
                format!(
                    "ToolHire: your rental request for {} was declined. Reason: {}.",
                    tool, reason
                )
            }
            NotificationKind::PaymentConfirmation => {
                let tool = require(parameters, "toolName")?;
                let amount = require(parameters, "amount")?;
                format!(
                    "ToolHire: we received your payment of ${} for {}. Thank you!",
                    format_amount(amount),
                    tool
                )
            }
            NotificationKind::TwoFactorCode => {
                let code = require(parameters, "code")?;
                format!(
                    "Your ToolHire verification code is: {}. This code will expire in 5 minutes.",
                    code
                )
            }
            NotificationKind::SecurityAlert => {
                let alert_type = require(parameters, "alertType")?;
                render_security_alert(alert_type)
            }
        };

        if text.chars().count() > self.segment_limit {
            return Err(CompositionError::MessageTooLong {
                limit: self.segment_limit,
                actual: text.chars().count(),
            });
        }

        Ok(RenderedMessage { kind, text })
    }
}

impl Default for MessageComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Security alerts dispatch over a known set of alert types, with an explicit
/// fallback arm interpolating the raw value for anything unrecognized.
fn render_security_alert(alert_type: &str) -> String {
    match alert_type {
        "login_new_device" => {
            "ToolHire security: a new device just signed in to your account. If this wasn't you, reset your password.".to_string()
        }
        "password_changed" => {
            "ToolHire security: your account password was changed. Contact support if you did not request this.".to_string()
        }
        "phone_changed" => {
            "ToolHire security: the phone number on your account was updated. Contact support if you did not request this.".to_string()
        }
        "account_locked" => {
            "ToolHire security: your account was locked after repeated failed sign-in attempts. Contact support to restore access.".to_string()
        }
        other => format!(
            "ToolHire security alert: unusual activity detected on your account ({}). Contact support if you need help.",
            other
        ),
    }
}

fn require<'a>(
    parameters: &'a HashMap<String, String>,
    name: &str,
) -> Result<&'a str, CompositionError> {
    parameters
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| CompositionError::MissingParameter {
            name: name.to_string(),
        })
}

/// Format an ISO `YYYY-MM-DD` date as `MMM dd, yyyy`; unparseable values pass
/// through raw so a sloppy caller degrades the message, not the delivery.
fn format_date(value: &str) -> String {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Format a decimal amount with two decimal places, passing raw on bad input
fn format_amount(value: &str) -> String {
    match value.parse::<f64>() {
        Ok(amount) => format!("{:.2}", amount),
        Err(_) => value.to_string(),
    }
}
