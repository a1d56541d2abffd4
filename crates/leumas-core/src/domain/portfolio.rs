use serde::{Deserialize, Serialize};

use super::Tag;

/// Portfolio project ("work").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub slug: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    /// Technologies used, as tags.
    pub tags: Vec<Tag>,
    pub is_featured: bool,
    pub meta_description: String,
}
