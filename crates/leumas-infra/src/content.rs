//! The site's content catalog, embedded at compile time.

use serde::Deserialize;

use leumas_core::domain::{BlogEntry, PortfolioProject, Service, Skill, TagRegistry};
use leumas_core::{ContentCatalog, DomainError};

const BLOG_JSON: &str = include_str!("../content/blog.json");
const PORTFOLIO_JSON: &str = include_str!("../content/portfolio.json");
const SERVICES_JSON: &str = include_str!("../content/services.json");
const SKILLS_JSON: &str = include_str!("../content/skills.json");

#[derive(Debug, Deserialize)]
struct RawBlogEntry {
    id: i32,
    title: String,
    slug: String,
    category: String,
    author: String,
    image: String,
    excerpt: String,
    content: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "published")]
    is_published: bool,
    #[serde(default)]
    meta_description: String,
}

fn published() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawProject {
    id: i32,
    title: String,
    subtitle: String,
    slug: String,
    category: String,
    image: String,
    description: String,
    challenge: String,
    solution: String,
    results: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    is_featured: bool,
    #[serde(default)]
    meta_description: String,
}

fn parse<T: for<'de> Deserialize<'de>>(name: &str, json: &str) -> Result<T, DomainError> {
    serde_json::from_str(json).map_err(|e| DomainError::Catalog(format!("{name}: {e}")))
}

/// The catalog shipped with the binary.
pub fn embedded_catalog() -> Result<ContentCatalog, DomainError> {
    load_catalog(BLOG_JSON, PORTFOLIO_JSON, SERVICES_JSON, SKILLS_JSON)
}

/// Build a catalog from JSON documents.
///
/// Tag ids are assigned by first appearance, blog posts before projects.
/// Services are ordered by their `order` field.
pub fn load_catalog(
    blog_json: &str,
    portfolio_json: &str,
    services_json: &str,
    skills_json: &str,
) -> Result<ContentCatalog, DomainError> {
    let raw_blog: Vec<RawBlogEntry> = parse("blog", blog_json)?;
    let raw_projects: Vec<RawProject> = parse("portfolio", portfolio_json)?;
    let mut services: Vec<Service> = parse("services", services_json)?;
    let skills: Vec<Skill> = parse("skills", skills_json)?;

    let mut registry = TagRegistry::new();

    let blog = raw_blog
        .into_iter()
        .map(|raw| BlogEntry {
            tags: raw.tags.iter().map(|t| registry.intern(t)).collect(),
            id: raw.id,
            title: raw.title,
            slug: raw.slug,
            category: raw.category,
            author: raw.author,
            image: raw.image,
            excerpt: raw.excerpt,
            content: raw.content,
            is_published: raw.is_published,
            meta_description: raw.meta_description,
        })
        .collect();

    let projects = raw_projects
        .into_iter()
        .map(|raw| PortfolioProject {
            tags: raw.tags.iter().map(|t| registry.intern(t)).collect(),
            id: raw.id,
            title: raw.title,
            subtitle: raw.subtitle,
            slug: raw.slug,
            category: raw.category,
            image: raw.image,
            description: raw.description,
            challenge: raw.challenge,
            solution: raw.solution,
            results: raw.results,
            is_featured: raw.is_featured,
            meta_description: raw.meta_description,
        })
        .collect();

    services.sort_by_key(|s| s.order);

    let catalog = ContentCatalog::new(blog, projects, services, skills, registry.into_tags())?;
    tracing::debug!(
        projects = catalog.projects().len(),
        services = catalog.services().len(),
        skills = catalog.skills().len(),
        tags = catalog.tags().len(),
        "Content catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use leumas_core::dates::BLOG_DATE_COUNT;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = embedded_catalog().unwrap();
        let posts = catalog.blog_posts(Utc::now());

        assert_eq!(posts.len(), BLOG_DATE_COUNT);
        assert_eq!(catalog.projects().len(), 9);
        assert_eq!(catalog.services().len(), 6);
        assert!(!catalog.skills().is_empty());
        assert_eq!(posts.first().unwrap().id, 1);
        assert_eq!(posts.first().unwrap().title, "Setting Up Kubernetes High Availability Clusters");
    }

    #[test]
    fn services_are_in_display_order() {
        let catalog = embedded_catalog().unwrap();
        let orders: Vec<i32> = catalog.services().iter().map(|s| s.order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn tags_are_shared_between_blog_and_portfolio() {
        let catalog = embedded_catalog().unwrap();
        let posts = catalog.blog_posts(Utc::now());

        let blog_docker = posts
            .iter()
            .flat_map(|p| &p.tags)
            .find(|t| t.slug == "docker")
            .unwrap();
        let project_docker = catalog
            .projects()
            .iter()
            .flat_map(|p| &p.tags)
            .find(|t| t.slug == "docker")
            .unwrap();
        assert_eq!(blog_docker.id, project_docker.id);

        let ids: Vec<i32> = catalog.tags().iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=catalog.tags().len() as i32).collect::<Vec<_>>());
    }

    #[test]
    fn malformed_json_is_a_catalog_error() {
        let err = load_catalog("{", "[]", "[]", "[]").unwrap_err();
        assert!(matches!(err, DomainError::Catalog(msg) if msg.starts_with("blog:")));
    }
}
