use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tag;

/// Words per minute used for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Blog post as stored in the catalog, before a display date is attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogEntry {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub author: String,
    pub image: String,
    pub excerpt: String,
    /// HTML body.
    pub content: String,
    pub tags: Vec<Tag>,
    pub is_published: bool,
    pub meta_description: String,
}

impl BlogEntry {
    /// Attach the per-request date.
    pub fn dated(&self, display_date: String, published_at: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            category: self.category.clone(),
            author: self.author.clone(),
            image: self.image.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            tags: self.tags.clone(),
            is_published: self.is_published,
            meta_description: self.meta_description.clone(),
            display_date,
            published_at,
        }
    }
}

/// Blog post as served: catalog fields plus the date computed for this request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub author: String,
    pub image: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<Tag>,
    pub is_published: bool,
    pub meta_description: String,
    /// Formatted with [`crate::dates::DISPLAY_DATE_FORMAT`].
    pub display_date: String,
    pub published_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn reading_time(&self) -> u32 {
        reading_time(&self.content)
    }

    pub fn shares_tag_with(&self, other: &BlogPost) -> bool {
        self.tags.iter().any(|t| other.tags.iter().any(|o| o.id == t.id))
    }
}

/// Minutes to read `body`: words / 200, floored, at least 1.
///
/// Markup is stripped first so tag names are not counted as words.
pub fn reading_time(body: &str) -> u32 {
    let words = strip_markup(body).split_whitespace().count();
    (words / WORDS_PER_MINUTE).max(1) as u32
}

fn strip_markup(body: &str) -> String {
    let mut text = String::with_capacity(body.len());
    let mut in_tag = false;

    for ch in body.chars() {
        match ch {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn reading_time_floors_with_minimum_of_one() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time(&words(199)), 1);
        assert_eq!(reading_time(&words(399)), 1);
        assert_eq!(reading_time(&words(400)), 2);
        assert_eq!(reading_time(&words(500)), 2);
        assert_eq!(reading_time(&words(1000)), 5);
    }

    #[test]
    fn reading_time_ignores_markup() {
        let body = format!("<h3>Title</h3><p>{}</p><ul><li>one</li></ul>", words(397));
        // 1 + 397 + 1 words once tags are removed
        assert_eq!(reading_time(&body), 1);
        let body = format!("<p>{}</p><p>{}</p>", words(200), words(200));
        assert_eq!(reading_time(&body), 2);
    }

    #[test]
    fn adjacent_tags_do_not_glue_words() {
        assert_eq!(strip_markup("one</p><p>two").split_whitespace().count(), 2);
    }
}
