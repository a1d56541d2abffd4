//! SeaORM entities for the persistent tables.

pub mod blog_post_stats;
pub mod contact_submission;
pub mod newsletter_subscription;
