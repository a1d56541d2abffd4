//! The content store: one immutable catalog of blog posts, projects, services
//! and skills, with lookup-with-fallback by id.

mod collection;
mod query;
mod related;

use chrono::{DateTime, Utc};

use crate::dates::{BLOG_DATE_COUNT, BLOG_DATE_STEP_DAYS, display_instants, format_display_date};
use crate::domain::{BlogEntry, BlogPost, PortfolioProject, Service, Skill, Tag};
use crate::error::DomainError;

pub use collection::{Collection, ContentKind, Record};
pub use query::{BlogOrdering, BlogQuery, PortfolioQuery, SkillOrdering, SkillQuery};
pub use related::{RELATED_POSTS_LIMIT, related_posts};

/// Everything the site renders, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ContentCatalog {
    blog: Vec<BlogEntry>,
    projects: Collection<PortfolioProject>,
    services: Collection<Service>,
    skills: Collection<Skill>,
    tags: Vec<Tag>,
}

impl ContentCatalog {
    pub fn new(
        blog: Vec<BlogEntry>,
        projects: Vec<PortfolioProject>,
        services: Vec<Service>,
        skills: Vec<Skill>,
        tags: Vec<Tag>,
    ) -> Result<Self, DomainError> {
        if blog.len() > BLOG_DATE_COUNT {
            return Err(DomainError::Catalog(format!(
                "{} blog posts but only {} display dates",
                blog.len(),
                BLOG_DATE_COUNT
            )));
        }
        // Validate blog ids through a throwaway collection.
        Collection::new(blog.clone())?;

        Ok(Self {
            blog,
            projects: Collection::new(projects)?,
            services: Collection::new(services)?,
            skills: Collection::new(skills)?,
            tags,
        })
    }

    /// Blog posts dated relative to `now`: post `k` in catalog order gets
    /// `now - k * 2 days`. Call once per request.
    pub fn blog_posts(&self, now: DateTime<Utc>) -> Collection<BlogPost> {
        let Some(instants) = display_instants(BLOG_DATE_COUNT, BLOG_DATE_STEP_DAYS, &now) else {
            tracing::error!(%now, "Blog dates out of range, serving no posts");
            return Collection::from_ordered(Vec::new());
        };

        let posts = self
            .blog
            .iter()
            .zip(instants)
            .map(|(entry, at)| entry.dated(format_display_date(&at), at))
            .collect();

        Collection::from_ordered(posts)
    }

    pub fn has_blog_post(&self, id: i32) -> bool {
        self.blog.iter().any(|b| b.id == id)
    }

    pub fn projects(&self) -> &Collection<PortfolioProject> {
        &self.projects
    }

    pub fn services(&self) -> &Collection<Service> {
        &self.services
    }

    pub fn skills(&self) -> &Collection<Skill> {
        &self.skills
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn tag(id: i32, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            slug: crate::domain::slugify(name),
        }
    }

    pub fn entry(id: i32, title: &str, tags: Vec<Tag>) -> BlogEntry {
        BlogEntry {
            id,
            title: title.to_string(),
            slug: crate::domain::slugify(title),
            category: "DevOps".to_string(),
            author: "Samuel Adomeh".to_string(),
            image: format!("/static/images/blog/img{id}.png"),
            excerpt: format!("Excerpt {id}"),
            content: format!("<p>Body of post {id}</p>"),
            tags,
            is_published: true,
            meta_description: String::new(),
        }
    }

    pub fn service(id: i32, title: &str, order: i32) -> Service {
        Service {
            id,
            title: title.to_string(),
            slug: crate::domain::slugify(title),
            icon: String::new(),
            description: format!("{title} description"),
            detailed_description: String::new(),
            process: vec![],
            technologies: vec![],
            order,
        }
    }

    pub fn catalog(blog: Vec<BlogEntry>) -> ContentCatalog {
        ContentCatalog::new(blog, vec![], vec![service(1, "Cloud", 0)], vec![], vec![]).unwrap()
    }
}
