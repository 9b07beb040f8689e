//! Outbound Email
//!
//! Best-effort notification layer. Delivery failure is never fatal to the
//! caller: the lifecycle manager captures the outcome into the action
//! response instead of unwinding.

pub mod smtp;
pub mod template;

pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

/// Email delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Failed to build email: {0}")]
    Build(String),

    #[error("Failed to send email: {0}")]
    Transport(String),
}

/// Outbound email sender
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), NotifyError>;
}
