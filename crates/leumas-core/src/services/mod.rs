//! Form handling: validation, persistence and best-effort notification.

mod contact;
pub mod emails;
mod newsletter;
mod notifier;

pub use contact::{ContactForm, ContactService, MailSettings};
pub use newsletter::{NewsletterForm, NewsletterService};
pub use notifier::{Notifier, mask_email};

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};

    use crate::domain::{
        ContactSubmission, NewContactSubmission, NewSubscription, NewsletterSubscription,
    };
    use crate::error::RepoError;
    use crate::ports::{
        BaseRepository, ContactRepository, MailError, Mailer, NewsletterRepository, OutboundEmail,
    };

    #[derive(Default)]
    pub struct Subscriptions(pub Mutex<Vec<NewsletterSubscription>>);

    #[async_trait]
    impl BaseRepository<NewsletterSubscription, i32> for Subscriptions {
        async fn find_by_id(&self, id: i32) -> Result<Option<NewsletterSubscription>, RepoError> {
            Ok(self.0.lock().unwrap().iter().find(|s| s.id == id).cloned())
        }
    }

    #[async_trait]
    impl NewsletterRepository for Subscriptions {
        async fn find_by_email(&self, email: &str) -> Result<Option<NewsletterSubscription>, RepoError> {
            Ok(self.0.lock().unwrap().iter().find(|s| s.email == email).cloned())
        }

        async fn create(&self, new: NewSubscription) -> Result<NewsletterSubscription, RepoError> {
            let mut rows = self.0.lock().unwrap();
            if rows.iter().any(|s| s.email == new.email) {
                return Err(RepoError::Constraint("email".into()));
            }
            let row = NewsletterSubscription {
                id: rows.len() as i32 + 1,
                email: new.email,
                subscribed_at: new.subscribed_at,
                is_active: true,
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn set_active(
            &self,
            id: i32,
            active: bool,
            subscribed_at: Option<DateTime<Utc>>,
        ) -> Result<NewsletterSubscription, RepoError> {
            let mut rows = self.0.lock().unwrap();
            let row = rows.iter_mut().find(|s| s.id == id).ok_or(RepoError::NotFound)?;
            row.is_active = active;
            if let Some(at) = subscribed_at {
                row.subscribed_at = at;
            }
            Ok(row.clone())
        }
    }

    #[derive(Default)]
    pub struct Submissions(pub Mutex<Vec<ContactSubmission>>);

    #[async_trait]
    impl BaseRepository<ContactSubmission, i32> for Submissions {
        async fn find_by_id(&self, id: i32) -> Result<Option<ContactSubmission>, RepoError> {
            Ok(self.0.lock().unwrap().iter().find(|s| s.id == id).cloned())
        }
    }

    #[async_trait]
    impl ContactRepository for Submissions {
        async fn create(&self, new: NewContactSubmission) -> Result<ContactSubmission, RepoError> {
            let mut rows = self.0.lock().unwrap();
            let row = ContactSubmission {
                id: rows.len() as i32 + 1,
                name: new.name,
                email: new.email,
                inquiry: new.inquiry,
                message: new.message,
                submitted_at: new.submitted_at,
                is_read: false,
            };
            rows.push(row.clone());
            Ok(row)
        }
    }

    /// Records every message; fails every send when `failing` is set.
    #[derive(Default)]
    pub struct Outbox {
        pub sent: Mutex<Vec<OutboundEmail>>,
        pub failing: bool,
    }

    impl Outbox {
        pub fn failing() -> Self {
            Self {
                sent: Mutex::default(),
                failing: true,
            }
        }

        pub fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for Outbox {
        async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email);
            if self.failing {
                return Err(MailError::Transport("connection refused".into()));
            }
            Ok(())
        }
    }
}
