//! Filtering, search and ordering for the list endpoints.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::{BlogPost, PortfolioProject, Skill, Tag};

/// Every whitespace-separated term must appear (case-insensitively) in at
/// least one of the fields.
fn matches_search(search: Option<&str>, fields: &[&str]) -> bool {
    let Some(search) = search.map(str::trim).filter(|s| !s.is_empty()) else {
        return true;
    };
    let fields: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();

    search
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| fields.iter().any(|f| f.contains(&term)))
}

fn matches_eq(filter: Option<&str>, value: &str) -> bool {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .is_none_or(|f| f.eq_ignore_ascii_case(value))
}

fn matches_tag(filter: Option<&str>, tags: &[Tag]) -> bool {
    filter
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .is_none_or(|f| tags.iter().any(|t| t.matches(f)))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlogOrdering {
    PublishedDate,
    #[default]
    PublishedDateDesc,
    ViewsCount,
    ViewsCountDesc,
}

impl BlogOrdering {
    /// Unknown values fall back to newest first.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("published_date") => Self::PublishedDate,
            Some("views_count") => Self::ViewsCount,
            Some("-views_count") => Self::ViewsCountDesc,
            _ => Self::PublishedDateDesc,
        }
    }
}

/// `?category=&tag=&author=&search=&ordering=` on the blog list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub author: Option<String>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl BlogQuery {
    /// Published posts matching every filter, ordered. `views` holds the
    /// current counters; missing ids count as zero.
    pub fn apply<'a, I>(&self, posts: I, views: &HashMap<i32, i64>) -> Vec<&'a BlogPost>
    where
        I: IntoIterator<Item = &'a BlogPost>,
    {
        let mut out: Vec<&BlogPost> = posts
            .into_iter()
            .filter(|p| p.is_published)
            .filter(|p| matches_eq(self.category.as_deref(), &p.category))
            .filter(|p| matches_eq(self.author.as_deref(), &p.author))
            .filter(|p| matches_tag(self.tag.as_deref(), &p.tags))
            .filter(|p| matches_search(self.search.as_deref(), &[&p.title, &p.content, &p.excerpt]))
            .collect();

        let views_of = |p: &BlogPost| views.get(&p.id).copied().unwrap_or(0);
        match BlogOrdering::parse(self.ordering.as_deref()) {
            BlogOrdering::PublishedDate => out.sort_by_key(|p| p.published_at),
            BlogOrdering::PublishedDateDesc => out.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
            BlogOrdering::ViewsCount => out.sort_by_key(|p| views_of(p)),
            BlogOrdering::ViewsCountDesc => out.sort_by(|a, b| views_of(b).cmp(&views_of(a))),
        }
        out
    }
}

/// `?category=&tag=&is_featured=&search=&ordering=` on the portfolio list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub is_featured: Option<bool>,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl PortfolioQuery {
    /// Featured projects first unless `ordering=is_featured` asks for the reverse.
    pub fn apply<'a, I>(&self, projects: I) -> Vec<&'a PortfolioProject>
    where
        I: IntoIterator<Item = &'a PortfolioProject>,
    {
        let mut out: Vec<&PortfolioProject> = projects
            .into_iter()
            .filter(|p| matches_eq(self.category.as_deref(), &p.category))
            .filter(|p| matches_tag(self.tag.as_deref(), &p.tags))
            .filter(|p| self.is_featured.is_none_or(|f| p.is_featured == f))
            .filter(|p| {
                matches_search(
                    self.search.as_deref(),
                    &[&p.title, &p.description, &p.challenge, &p.solution],
                )
            })
            .collect();

        if self.ordering.as_deref().map(str::trim) == Some("is_featured") {
            out.sort_by_key(|p| p.is_featured);
        } else {
            out.sort_by_key(|p| !p.is_featured);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillOrdering {
    /// Category A-Z, strongest first within a category.
    #[default]
    CategoryThenProficiency,
    Category,
    CategoryDesc,
    Proficiency,
    ProficiencyDesc,
}

impl SkillOrdering {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("category") => Self::Category,
            Some("-category") => Self::CategoryDesc,
            Some("proficiency") => Self::Proficiency,
            Some("-proficiency") => Self::ProficiencyDesc,
            _ => Self::CategoryThenProficiency,
        }
    }

    fn compare(&self, a: &Skill, b: &Skill) -> Ordering {
        match self {
            Self::CategoryThenProficiency => a
                .category
                .cmp(&b.category)
                .then(b.proficiency.cmp(&a.proficiency)),
            Self::Category => a.category.cmp(&b.category),
            Self::CategoryDesc => b.category.cmp(&a.category),
            Self::Proficiency => a.proficiency.cmp(&b.proficiency),
            Self::ProficiencyDesc => b.proficiency.cmp(&a.proficiency),
        }
    }
}

/// `?category=&ordering=` on the skills list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillQuery {
    pub category: Option<String>,
    pub ordering: Option<String>,
}

impl SkillQuery {
    pub fn apply<'a, I>(&self, skills: I) -> Vec<&'a Skill>
    where
        I: IntoIterator<Item = &'a Skill>,
    {
        let ordering = SkillOrdering::parse(self.ordering.as_deref());
        let mut out: Vec<&Skill> = skills
            .into_iter()
            .filter(|s| matches_eq(self.category.as_deref(), &s.category))
            .collect();
        out.sort_by(|a, b| ordering.compare(a, b));
        out
    }
}
