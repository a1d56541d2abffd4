use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use super::emails;
use super::notifier::{Notifier, mask_email};
use crate::domain::{ContactSubmission, NewContactSubmission};
use crate::error::{DomainError, FieldErrors};
use crate::ports::ContactRepository;

pub(crate) const REQUIRED: &str = "This field is required.";

/// Contact form as posted. Fields are trimmed before validation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(length(max = 120, message = "Ensure this value has at most 120 characters."))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 70, message = "Ensure this value has at most 70 characters."))]
    pub inquiry: String,

    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            inquiry: self.inquiry.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Trim, then validate; returns the cleaned form or every field error.
    pub fn clean(&self) -> Result<Self, FieldErrors> {
        let form = self.trimmed();
        let mut errors = match form.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from(e),
        };

        for (field, value) in [
            ("name", &form.name),
            ("email", &form.email),
            ("inquiry", &form.inquiry),
            ("message", &form.message),
        ] {
            if value.is_empty() {
                errors.set(field, REQUIRED);
            }
        }

        if errors.is_empty() { Ok(form) } else { Err(errors) }
    }
}

/// Sender and operator addresses for outbound mail.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub from: String,
    pub operator: String,
}

pub struct ContactService {
    repo: Arc<dyn ContactRepository>,
    notifier: Notifier,
    settings: MailSettings,
}

impl ContactService {
    pub fn new(repo: Arc<dyn ContactRepository>, notifier: Notifier, settings: MailSettings) -> Self {
        Self {
            repo,
            notifier,
            settings,
        }
    }

    /// Validate, store, then notify the operator and the submitter.
    ///
    /// The two sends are independent; neither failure reaches the caller.
    #[tracing::instrument(name = "Submit contact form", skip_all, fields(email = %mask_email(&form.email)))]
    pub async fn submit(&self, form: &ContactForm) -> Result<ContactSubmission, DomainError> {
        let form = form.clean().map_err(DomainError::Validation)?;

        let submission = self
            .repo
            .create(NewContactSubmission {
                name: form.name,
                email: form.email,
                inquiry: form.inquiry,
                message: form.message,
                submitted_at: Utc::now(),
            })
            .await?;

        let operator = emails::contact_received(&self.settings.from, &self.settings.operator, &submission);
        let confirmation = emails::contact_confirmation(&self.settings.from, &submission);
        let (operator_sent, confirmation_sent) =
            futures::join!(self.notifier.send(operator), self.notifier.send(confirmation));

        tracing::info!(
            submission_id = submission.id,
            operator_sent,
            confirmation_sent,
            "Contact submission stored"
        );
        Ok(submission)
    }
}
