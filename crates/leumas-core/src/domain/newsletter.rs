use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Newsletter subscription. Unsubscribing clears `is_active`; rows are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub id: i32,
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Subscription to be inserted.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}

impl NewSubscription {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            subscribed_at: Utc::now(),
        }
    }
}
