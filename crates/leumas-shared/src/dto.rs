//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::response::FieldErrorMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

/// Blog post as listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostSummary {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub author: String,
    pub category: String,
    pub excerpt: String,
    pub featured_image: String,
    /// Instant behind `display_date`.
    pub published_date: DateTime<Utc>,
    /// `"%d %b, %Y"`, recomputed per request.
    pub display_date: String,
    pub views_count: i64,
    pub tags: Vec<TagDto>,
    /// Minutes.
    pub reading_time: u32,
    pub meta_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub summary: BlogPostSummary,
    pub content: String,
    pub related_posts: Vec<BlogPostSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub tags: Vec<TagDto>,
    pub is_featured: bool,
    pub meta_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDetail {
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    pub challenge: String,
    pub solution: String,
    pub results: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub proficiency: u8,
}

/// Body of `POST /api/newsletter` and `/subscribe-newsletter`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterRequest {
    #[serde(default)]
    pub email: String,
}

/// Reply of the site's subscribe form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrorMap>,
}

impl SubscribeResponse {
    pub const SUCCESS: &'static str = "Thank you for subscribing! Check your email for updates.";
    pub const FAILURE: &'static str = "Email already subscribed or invalid.";

    pub fn subscribed() -> Self {
        Self {
            success: true,
            message: Self::SUCCESS.to_string(),
            errors: None,
        }
    }

    pub fn rejected(errors: FieldErrorMap) -> Self {
        Self {
            success: false,
            message: Self::FAILURE.to_string(),
            errors: Some(errors),
        }
    }
}

/// `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResponse {
    pub detail: String,
}

impl DetailResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewsResponse {
    pub id: i32,
    pub views_count: i64,
}
