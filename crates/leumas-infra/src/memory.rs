//! In-memory repositories - used when no database is configured.
//!
//! Note: Data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use leumas_core::domain::{
    ContactSubmission, NewContactSubmission, NewSubscription, NewsletterSubscription,
};
use leumas_core::error::RepoError;
use leumas_core::ports::{BaseRepository, ContactRepository, NewsletterRepository, ViewCounter};

/// Newsletter subscriptions in a `Vec`, ids assigned sequentially from 1.
#[derive(Default)]
pub struct InMemoryNewsletterRepository {
    rows: RwLock<Vec<NewsletterSubscription>>,
}

impl InMemoryNewsletterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<NewsletterSubscription, i32> for InMemoryNewsletterRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<NewsletterSubscription>, RepoError> {
        Ok(self.rows.read().await.iter().find(|s| s.id == id).cloned())
    }
}

#[async_trait]
impl NewsletterRepository for InMemoryNewsletterRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<NewsletterSubscription>, RepoError> {
        Ok(self.rows.read().await.iter().find(|s| s.email == email).cloned())
    }

    async fn create(&self, subscription: NewSubscription) -> Result<NewsletterSubscription, RepoError> {
        // Check and insert under one write lock, like the unique index would.
        let mut rows = self.rows.write().await;
        if rows.iter().any(|s| s.email == subscription.email) {
            return Err(RepoError::Constraint("email already exists".to_string()));
        }

        let row = NewsletterSubscription {
            id: rows.len() as i32 + 1,
            email: subscription.email,
            subscribed_at: subscription.subscribed_at,
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
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|s| s.id == id).ok_or(RepoError::NotFound)?;

        row.is_active = active;
        if let Some(at) = subscribed_at {
            row.subscribed_at = at;
        }
        Ok(row.clone())
    }
}

#[derive(Default)]
pub struct InMemoryContactRepository {
    rows: RwLock<Vec<ContactSubmission>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl BaseRepository<ContactSubmission, i32> for InMemoryContactRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<ContactSubmission>, RepoError> {
        Ok(self.rows.read().await.iter().find(|s| s.id == id).cloned())
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, submission: NewContactSubmission) -> Result<ContactSubmission, RepoError> {
        let mut rows = self.rows.write().await;
        let row = ContactSubmission {
            id: rows.len() as i32 + 1,
            name: submission.name,
            email: submission.email,
            inquiry: submission.inquiry,
            message: submission.message,
            submitted_at: submission.submitted_at,
            is_read: false,
        };
        rows.push(row.clone());
        Ok(row)
    }
}

/// View counters behind a single write lock.
#[derive(Default)]
pub struct InMemoryViewCounter {
    counts: RwLock<HashMap<i32, i64>>,
}

impl InMemoryViewCounter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ViewCounter for InMemoryViewCounter {
    async fn increment(&self, post_id: i32) -> Result<i64, RepoError> {
        let mut counts = self.counts.write().await;
        let count = counts.entry(post_id).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    async fn get(&self, post_id: i32) -> Result<i64, RepoError> {
        Ok(self.counts.read().await.get(&post_id).copied().unwrap_or(0))
    }

    async fn all(&self) -> Result<HashMap<i32, i64>, RepoError> {
        Ok(self.counts.read().await.clone())
    }
}
