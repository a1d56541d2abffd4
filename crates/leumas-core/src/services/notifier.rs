use std::sync::Arc;

use crate::ports::{Mailer, OutboundEmail};

/// Best-effort delivery: a failed send is logged and otherwise ignored.
#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
}

impl Notifier {
    pub fn new(mailer: Arc<dyn Mailer>) -> Self {
        Self { mailer }
    }

    /// Returns whether the mailer accepted the message.
    pub async fn send(&self, email: OutboundEmail) -> bool {
        let to = mask_email(&email.to);
        let subject = email.subject.clone();

        match self.mailer.send(email).await {
            Ok(()) => {
                tracing::debug!(to = %to, subject = %subject, "Email sent");
                true
            }
            Err(e) => {
                tracing::warn!(to = %to, subject = %subject, error = %e, "Email delivery failed");
                false
            }
        }
    }
}

/// `samuel@example.com` -> `s***@example.com`, for logs.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}
