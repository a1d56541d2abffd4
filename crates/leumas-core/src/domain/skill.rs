use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i32,
    pub name: String,
    /// e.g. "Cloud Platforms", "CI/CD Tools".
    pub category: String,
    /// 0..=100
    pub proficiency: u8,
}
