//! HTML pages.

use actix_web::{HttpResponse, http::header::ContentType, web};
use chrono::Utc;
use maud::Markup;

use leumas_core::content::{RELATED_POSTS_LIMIT, related_posts};
use leumas_core::domain::BlogPost;
use leumas_core::services::ContactForm;
use leumas_core::{ContentKind, FieldErrors};

use crate::middleware::error::{AppError, AppResult};
use crate::render::Page;
use crate::render::pages::{self, ContactFormView, HomeContent};
use crate::state::AppState;

pub(crate) fn html(markup: Markup) -> HttpResponse {
    html_with(HttpResponse::Ok(), markup)
}

pub(crate) fn html_with(mut builder: actix_web::HttpResponseBuilder, markup: Markup) -> HttpResponse {
    builder.content_type(ContentType::html()).body(markup.into_string())
}

pub(crate) fn empty_collection(kind: ContentKind) -> AppError {
    AppError::NotFound(format!("No {kind} available"))
}

/// The home layout with every service and project, optionally the blog
/// teaser, and the contact form in the given state.
pub(crate) fn home_page(
    state: &AppState,
    page: &Page<'_>,
    with_preview: bool,
    form: ContactFormView<'_>,
) -> Markup {
    let posts = state.catalog.blog_posts(Utc::now());
    let preview: &[BlogPost] = if with_preview { posts.take(4) } else { &[] };

    let content = HomeContent {
        services: state.catalog.services().get_all(),
        projects: state.catalog.projects().get_all(),
        preview,
    };
    pages::home(page, content, form)
}

fn blank_form<'a>(values: &'a ContactForm, errors: &'a FieldErrors) -> ContactFormView<'a> {
    ContactFormView {
        values,
        errors,
        sent: false,
    }
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let (values, errors) = (ContactForm::default(), FieldErrors::new());
    let page = Page::new("", "/").description("Senior DevOps Engineer: cloud, Kubernetes and CI/CD.");
    html(home_page(&state, &page, true, blank_form(&values, &errors)))
}

/// GET /about
pub async fn about(state: web::Data<AppState>) -> HttpResponse {
    let (values, errors) = (ContactForm::default(), FieldErrors::new());
    let page = Page::new("About", "/about").scroll_to("about");
    html(home_page(&state, &page, false, blank_form(&values, &errors)))
}

/// GET /services
pub async fn services(state: web::Data<AppState>) -> HttpResponse {
    let (values, errors) = (ContactForm::default(), FieldErrors::new());
    let page = Page::new("Services", "/services").scroll_to("service");
    html(home_page(&state, &page, false, blank_form(&values, &errors)))
}

/// GET /works
pub async fn works(state: web::Data<AppState>) -> HttpResponse {
    let page = Page::new("Works", "/works").scroll_to("project-gallery");
    html(pages::works(&page, state.catalog.projects().get_all()))
}

/// GET /blog and /blogs
pub async fn blog(state: web::Data<AppState>) -> HttpResponse {
    let posts = state.catalog.blog_posts(Utc::now());
    let page = Page::new("Blog", "/blog").scroll_to("blog");
    html(pages::blog_list(&page, posts.get_all()))
}

/// GET /blog/{id} - unknown ids show the first post.
pub async fn blog_detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let posts = state.catalog.blog_posts(Utc::now());
    let post = posts
        .resolve(&path)
        .ok_or_else(|| empty_collection(ContentKind::Blog))?;

    let views = state.views.get(post.id).await?;
    let related = related_posts(post, posts.iter(), RELATED_POSTS_LIMIT);

    Ok(html(pages::blog_detail(post, views, &related, posts.get_all())))
}

/// GET /portfolio/{id} - unknown ids show the first project.
pub async fn portfolio_detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let projects = state.catalog.projects();
    let project = projects
        .resolve(&path)
        .ok_or_else(|| empty_collection(ContentKind::Portfolio))?;

    Ok(html(pages::portfolio_detail(project, projects.get_all())))
}

/// GET /service/{id} - unknown ids show the first service.
pub async fn service_detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let services = state.catalog.services();
    let service = services
        .resolve(&path)
        .ok_or_else(|| empty_collection(ContentKind::Service))?;

    Ok(html(pages::service_detail(service, services.get_all())))
}

#[cfg(test)]
mod tests {
    use crate::state::testing;
    use actix_web::{App, http::StatusCode, test};
    use leumas_infra::RecordingMailer;
    use std::sync::Arc;

    async fn get(uri: &str) -> (StatusCode, String) {
        let state = testing::state(Arc::new(RecordingMailer::new()));
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_rt::test]
    async fn pages_render_with_their_scroll_targets() {
        for (uri, anchor) in [
            ("/about", Some("about")),
            ("/services", Some("service")),
            ("/works", Some("project-gallery")),
            ("/blog", Some("blog")),
            ("/blogs", Some("blog")),
            ("/", None),
        ] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            match anchor {
                Some(anchor) => assert!(body.contains(&format!(r#"data-scroll-to="{anchor}""#)), "{uri}"),
                None => assert!(!body.contains("data-scroll-to"), "{uri}"),
            }
        }
    }

    #[actix_rt::test]
    async fn home_previews_the_first_four_posts() {
        let (_, body) = get("/").await;
        for id in 1..=4 {
            assert!(body.contains(&format!(r#"href="/blog/{id}""#)));
        }
        assert!(!body.contains(r#"href="/blog/5""#));
    }

    fn title(html: &str) -> &str {
        html.split("<title>")
            .nth(1)
            .and_then(|t| t.split("</title>").next())
            .unwrap_or("")
    }

    #[actix_rt::test]
    async fn unknown_detail_ids_fall_back_to_the_first_record() {
        let (status, first) = get("/blog/1").await;
        assert_eq!(status, StatusCode::OK);

        for uri in ["/blog/99", "/blog/abc", "/blog/-3"] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(title(&body), title(&first), "{uri}");
        }

        let (status, _) = get("/portfolio/999").await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = get("/service/0").await;
        assert_eq!(status, StatusCode::OK);
    }
}
