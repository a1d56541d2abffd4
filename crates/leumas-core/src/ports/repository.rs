use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{ContactSubmission, NewContactSubmission, NewSubscription, NewsletterSubscription};
use crate::error::RepoError;

/// Generic lookup shared by every table-backed repository.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Newsletter subscriptions. Emails are unique across active and inactive rows.
#[async_trait]
pub trait NewsletterRepository: BaseRepository<NewsletterSubscription, i32> {
    async fn find_by_email(&self, email: &str) -> Result<Option<NewsletterSubscription>, RepoError>;

    /// Insert a new active subscription. A taken email is `RepoError::Constraint`.
    async fn create(&self, subscription: NewSubscription) -> Result<NewsletterSubscription, RepoError>;

    /// Flip `is_active`, stamping `subscribed_at` when given.
    async fn set_active(
        &self,
        id: i32,
        active: bool,
        subscribed_at: Option<DateTime<Utc>>,
    ) -> Result<NewsletterSubscription, RepoError>;
}

/// Stored contact form submissions.
#[async_trait]
pub trait ContactRepository: BaseRepository<ContactSubmission, i32> {
    async fn create(&self, submission: NewContactSubmission) -> Result<ContactSubmission, RepoError>;
}

/// Per-post view counters.
///
/// `increment` must be atomic: n concurrent calls raise the count by exactly n.
#[async_trait]
pub trait ViewCounter: Send + Sync {
    /// Add one view and return the new count.
    async fn increment(&self, post_id: i32) -> Result<i64, RepoError>;

    /// Current count, zero for posts never viewed.
    async fn get(&self, post_id: i32) -> Result<i64, RepoError>;

    /// Every non-zero counter.
    async fn all(&self) -> Result<HashMap<i32, i64>, RepoError>;
}
