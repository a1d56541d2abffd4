//! Domain entities - the content records and form submissions.

mod blog;
mod contact;
mod newsletter;
mod portfolio;
mod service;
mod skill;
mod tag;

pub use blog::{BlogEntry, BlogPost, reading_time};
pub use contact::{ContactSubmission, NewContactSubmission};
pub use newsletter::{NewSubscription, NewsletterSubscription};
pub use portfolio::PortfolioProject;
pub use service::Service;
pub use skill::Skill;
pub use tag::{Tag, TagRegistry, slugify};
