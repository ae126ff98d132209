//! Outbound ports: interfaces for delivering mail to staff
//!
//! [`MailSender`] decouples the contact service from the concrete transport.
//! Implementations live in [`crate::infrastructure::mail`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A plain-text message addressed to one or more recipients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail has no recipients")]
    NoRecipients,

    #[error("transport error: {0}")]
    Transport(String),
}

impl From<MailError> for crate::domain::DomainError {
    fn from(e: MailError) -> Self {
        Self::Delivery(e.to_string())
    }
}

/// Port for handing a message to a mail transport.
///
/// Failures are returned to the caller; implementations must not retry or
/// swallow transport errors.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, mail: OutgoingMail) -> Result<(), MailError>;
}
