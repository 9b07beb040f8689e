//! SMTP Mailer

use super::{Mailer, NotifyError};
use crate::core::SmtpConfig;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// Mailer backed by an SMTP relay
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), NotifyError> {
        let email = Message::builder()
            .from(
                self.config
                    .from_address
                    .parse()
                    .map_err(|e| NotifyError::Address(format!("from address: {e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| NotifyError::Address(format!("to address: {e}")))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| NotifyError::Build(e.to_string()))?;

        let creds = Credentials::new(self.config.username.clone(), self.config.password.clone());
        let mailer = SmtpTransport::relay(&self.config.host)
            .map_err(|e| NotifyError::Transport(e.to_string()))?
            .port(self.config.port)
            .credentials(creds)
            .build();

        mailer
            .send(&email)
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        tracing::info!(to = %to, subject = %subject, "Email sent");
        Ok(())
    }
}
