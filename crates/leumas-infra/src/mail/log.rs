use async_trait::async_trait;

use leumas_core::ports::{MailError, Mailer, OutboundEmail};
use leumas_core::services::mask_email;

/// Logs messages instead of sending them. Used when no SMTP host is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        tracing::info!(
            to = %mask_email(&email.to),
            subject = %email.subject,
            text_len = email.text_body.len(),
            html_len = email.html_body.len(),
            "Email not sent (no SMTP host configured)"
        );
        Ok(())
    }
}
