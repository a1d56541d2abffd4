use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use super::emails;
use super::notifier::{Notifier, mask_email};
use crate::domain::{NewSubscription, NewsletterSubscription};
use crate::error::{DomainError, RepoError};
use crate::ports::NewsletterRepository;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewsletterForm {
    #[serde(default)]
    #[validate(email)]
    pub email: String,
}

impl NewsletterForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    /// The trimmed address, or `InvalidEmail`.
    pub fn clean(&self) -> Result<String, DomainError> {
        let form = Self::new(self.email.trim());
        if form.email.is_empty() || form.validate().is_err() {
            return Err(DomainError::InvalidEmail);
        }
        Ok(form.email)
    }
}

pub struct NewsletterService {
    repo: Arc<dyn NewsletterRepository>,
    notifier: Notifier,
    from: String,
}

impl NewsletterService {
    pub fn new(repo: Arc<dyn NewsletterRepository>, notifier: Notifier, from: impl Into<String>) -> Self {
        Self {
            repo,
            notifier,
            from: from.into(),
        }
    }

    /// Subscribe `email`, re-activating a previous subscription if there is one.
    ///
    /// Fails with `DuplicateSubscription` while an active subscription exists.
    /// The confirmation email is best effort.
    #[tracing::instrument(name = "Subscribe to newsletter", skip_all, fields(email = %mask_email(email)))]
    pub async fn subscribe(&self, email: &str) -> Result<NewsletterSubscription, DomainError> {
        let email = NewsletterForm::new(email).clean()?;

        let subscription = match self.repo.find_by_email(&email).await? {
            Some(existing) if existing.is_active => return Err(DomainError::DuplicateSubscription),
            Some(existing) => {
                tracing::info!(subscription_id = existing.id, "Re-activating newsletter subscription");
                self.repo.set_active(existing.id, true, Some(Utc::now())).await?
            }
            None => self
                .repo
                .create(NewSubscription::new(email))
                .await
                .map_err(|e| match e {
                    // lost a race with a concurrent subscribe for the same address
                    RepoError::Constraint(_) => DomainError::DuplicateSubscription,
                    other => other.into(),
                })?,
        };

        self.notifier
            .send(emails::newsletter_confirmation(&self.from, &subscription))
            .await;

        Ok(subscription)
    }

    /// Deactivate the subscription for `email`. Returns whether anything changed.
    #[tracing::instrument(name = "Unsubscribe from newsletter", skip_all, fields(email = %mask_email(email)))]
    pub async fn unsubscribe(&self, email: &str) -> Result<bool, DomainError> {
        let email = NewsletterForm::new(email).clean()?;

        match self.repo.find_by_email(&email).await? {
            Some(existing) if existing.is_active => {
                self.repo.set_active(existing.id, false, None).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
