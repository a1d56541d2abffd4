use serde::{Deserialize, Serialize};

/// Service offered on the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: i32,
    pub title: String,
    pub slug: String,
    /// Icon image path.
    pub icon: String,
    pub description: String,
    /// HTML fragment shown on the detail page.
    pub detailed_description: String,
    pub process: Vec<String>,
    pub technologies: Vec<String>,
    pub order: i32,
}
