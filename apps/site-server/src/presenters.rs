//! Domain records to API payloads.

use std::collections::HashMap;

use leumas_core::domain::{BlogPost, PortfolioProject, Service, Skill, Tag};
use leumas_shared::dto::{
    BlogPostDetail, BlogPostSummary, PortfolioDetail, PortfolioSummary, ServiceDto, SkillDto, TagDto,
};

pub fn tag(tag: &Tag) -> TagDto {
    TagDto {
        id: tag.id,
        name: tag.name.clone(),
        slug: tag.slug.clone(),
    }
}

fn tags(tags: &[Tag]) -> Vec<TagDto> {
    tags.iter().map(tag).collect()
}

/// `views` holds the current counters; posts never viewed count zero.
pub fn blog_summary(post: &BlogPost, views: &HashMap<i32, i64>) -> BlogPostSummary {
    BlogPostSummary {
        id: post.id,
        title: post.title.clone(),
        slug: post.slug.clone(),
        author: post.author.clone(),
        category: post.category.clone(),
        excerpt: post.excerpt.clone(),
        featured_image: post.image.clone(),
        published_date: post.published_at,
        display_date: post.display_date.clone(),
        views_count: views.get(&post.id).copied().unwrap_or(0),
        tags: tags(&post.tags),
        reading_time: post.reading_time(),
        meta_description: post.meta_description.clone(),
    }
}

pub fn blog_detail(post: &BlogPost, related: &[&BlogPost], views: &HashMap<i32, i64>) -> BlogPostDetail {
    BlogPostDetail {
        summary: blog_summary(post, views),
        content: post.content.clone(),
        related_posts: related.iter().map(|p| blog_summary(p, views)).collect(),
    }
}

pub fn portfolio_summary(project: &PortfolioProject) -> PortfolioSummary {
    PortfolioSummary {
        id: project.id,
        title: project.title.clone(),
        subtitle: project.subtitle.clone(),
        slug: project.slug.clone(),
        category: project.category.clone(),
        image: project.image.clone(),
        description: project.description.clone(),
        tags: tags(&project.tags),
        is_featured: project.is_featured,
        meta_description: project.meta_description.clone(),
    }
}

pub fn portfolio_detail(project: &PortfolioProject) -> PortfolioDetail {
    PortfolioDetail {
        summary: portfolio_summary(project),
        challenge: project.challenge.clone(),
        solution: project.solution.clone(),
        results: project.results.clone(),
    }
}

pub fn service(service: &Service) -> ServiceDto {
    ServiceDto {
        id: service.id,
        title: service.title.clone(),
        slug: service.slug.clone(),
        description: service.description.clone(),
        icon: service.icon.clone(),
        order: service.order,
    }
}

pub fn skill(skill: &Skill) -> SkillDto {
    SkillDto {
        id: skill.id,
        name: skill.name.clone(),
        category: skill.category.clone(),
        proficiency: skill.proficiency,
    }
}
