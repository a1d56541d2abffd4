//! `/api/blogs`

use actix_web::{HttpResponse, web};
use chrono::Utc;

use leumas_core::content::{BlogQuery, RELATED_POSTS_LIMIT, related_posts};
use leumas_core::{ContentKind, DomainError};
use leumas_shared::dto::{BlogPostSummary, ViewsResponse};

use crate::handlers::pages::empty_collection;
use crate::middleware::error::{AppError, AppResult};
use crate::presenters;
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(state: web::Data<AppState>, query: web::Query<BlogQuery>) -> AppResult<HttpResponse> {
    let posts = state.catalog.blog_posts(Utc::now());
    let views = state.views.all().await?;

    let body: Vec<BlogPostSummary> = query
        .apply(posts.iter(), &views)
        .into_iter()
        .map(|post| presenters::blog_summary(post, &views))
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/blogs/{id} - unknown ids return the first post.
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let posts = state.catalog.blog_posts(Utc::now());
    let post = posts.resolve(&path).ok_or_else(|| empty_collection(ContentKind::Blog))?;
    let views = state.views.all().await?;
    let related = related_posts(post, posts.iter(), RELATED_POSTS_LIMIT);

    Ok(HttpResponse::Ok().json(presenters::blog_detail(post, &related, &views)))
}

/// GET /api/blogs/{id}/related_posts
pub async fn related(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let posts = state.catalog.blog_posts(Utc::now());
    let post = posts.resolve(&path).ok_or_else(|| empty_collection(ContentKind::Blog))?;
    let views = state.views.all().await?;

    let body: Vec<BlogPostSummary> = related_posts(post, posts.iter(), RELATED_POSTS_LIMIT)
        .into_iter()
        .map(|p| presenters::blog_summary(p, &views))
        .collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/blogs/{id}/increment_views
///
/// No fallback here: only posts in the catalog are counted.
pub async fn increment_views(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id: i32 = path
        .trim()
        .parse()
        .map_err(|_| AppError::NotFound(format!("blog post {:?} not found", path.as_str())))?;

    if !state.catalog.has_blog_post(id) {
        return Err(DomainError::NotFound {
            entity_type: ContentKind::Blog.as_str(),
            id,
        }
        .into());
    }

    let views_count = state.views.increment(id).await?;
    tracing::debug!(post_id = id, views_count, "Blog post viewed");

    Ok(HttpResponse::Ok().json(ViewsResponse { id, views_count }))
}
