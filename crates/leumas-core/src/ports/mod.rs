//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod mailer;
mod rate_limit;
mod repository;

pub use mailer::{MailError, Mailer, OutboundEmail};
pub use rate_limit::{RateLimitError, RateLimitResult, RateLimiter};
pub use repository::{BaseRepository, ContactRepository, NewsletterRepository, ViewCounter};
