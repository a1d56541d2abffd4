use std::sync::Mutex;

use async_trait::async_trait;

use leumas_core::ports::{MailError, Mailer, OutboundEmail};

/// Keeps every message in memory. Optionally fails each send after recording it.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records messages but reports a transport error for each.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email);
        }
        if self.fail {
            return Err(MailError::Transport("recording mailer set to fail".to_string()));
        }
        Ok(())
    }
}
