use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub inquiry: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
    pub is_read: bool,
}

/// Validated submission to be inserted.
#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub inquiry: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}
