//! # Leumas Core
//!
//! The domain layer of the Leumas portfolio site.
//! Content records, the display-date generator, lookup-with-fallback over the
//! content store, and the contact/newsletter services. No infrastructure
//! dependencies: storage, mail and rate limiting are reached through `ports`.

pub mod content;
pub mod dates;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use content::{Collection, ContentCatalog, ContentKind, Record};
pub use error::{DomainError, FieldErrors, RepoError};
