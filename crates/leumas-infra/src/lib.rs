//! # Leumas Infrastructure
//!
//! Concrete implementations of the ports defined in `leumas-core`:
//! the embedded content catalog, SeaORM repositories, in-memory fallbacks,
//! rate limiting and outbound mail.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `rate-limit` - Per-client rate limiting via governor
//! - `smtp` - SMTP delivery via lettre

pub mod content;
pub mod mail;
pub mod memory;
pub mod rate_limit;

#[cfg(feature = "postgres")]
pub mod database;

// Re-exports - always available
pub use content::{embedded_catalog, load_catalog};
pub use mail::{LogMailer, RecordingMailer};
pub use memory::{InMemoryContactRepository, InMemoryNewsletterRepository, InMemoryViewCounter};
pub use rate_limit::{AllowAllRateLimiter, ParseRateLimitError, RateLimitConfig};

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConfig, DatabaseConnections, PostgresContactRepository, PostgresNewsletterRepository,
    PostgresViewCounter,
};

#[cfg(feature = "rate-limit")]
pub use rate_limit::InMemoryRateLimiter;

#[cfg(feature = "smtp")]
pub use mail::{SmtpConfig, SmtpMailer, SmtpSecurity};
