use serde::{Deserialize, Serialize};

/// Tag shared by blog posts and portfolio projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl Tag {
    /// Matches an id, slug or case-insensitive name.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        needle.parse::<i32>().is_ok_and(|id| id == self.id)
            || self.slug == needle
            || self.name.eq_ignore_ascii_case(needle)
    }
}

/// Lowercase ASCII slug: alphanumerics kept, runs of anything else become one `-`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Assigns tag ids in order of first appearance.
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing tag with the same slug, or registers a new one.
    pub fn intern(&mut self, name: &str) -> Tag {
        let name = name.trim();
        let slug = slugify(name);

        if let Some(tag) = self.tags.iter().find(|t| t.slug == slug) {
            return tag.clone();
        }

        let tag = Tag {
            id: self.tags.len() as i32 + 1,
            name: name.to_string(),
            slug,
        };
        self.tags.push(tag.clone());
        tag
    }

    pub fn into_tags(self) -> Vec<Tag> {
        self.tags
    }
}
