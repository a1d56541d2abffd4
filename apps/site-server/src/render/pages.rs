//! Page templates.

use maud::{Markup, PreEscaped, html};

use leumas_core::FieldErrors;
use leumas_core::domain::{BlogPost, PortfolioProject, Service};
use leumas_core::services::ContactForm;

use super::layout::{Page, document};

/// State of the contact form embedded in the home page.
#[derive(Debug, Clone, Copy)]
pub struct ContactFormView<'a> {
    pub values: &'a ContactForm,
    pub errors: &'a FieldErrors,
    /// Show the thank-you notice instead of an empty form.
    pub sent: bool,
}

/// Collections shown on the home page.
#[derive(Debug, Clone, Copy)]
pub struct HomeContent<'a> {
    pub services: &'a [Service],
    pub projects: &'a [PortfolioProject],
    /// Blog teaser; empty on pages that only reuse the home layout.
    pub preview: &'a [BlogPost],
}

fn field_errors(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(messages) = errors.get(field) {
            ul.errorlist {
                @for message in messages {
                    li { (message) }
                }
            }
        }
    }
}

fn tag_list(tags: &[leumas_core::domain::Tag]) -> Markup {
    html! {
        @if !tags.is_empty() {
            ul.tags {
                @for tag in tags {
                    li { a href={ "/api/blogs?tag=" (tag.slug) } { (tag.name) } }
                }
            }
        }
    }
}

fn service_card(service: &Service) -> Markup {
    html! {
        article.service-card {
            @if !service.icon.is_empty() {
                img src=(service.icon) alt="";
            }
            h3 { a href={ "/service/" (service.id) } { (service.title) } }
            p { (service.description) }
        }
    }
}

fn project_card(project: &PortfolioProject) -> Markup {
    html! {
        article.project-card.featured[project.is_featured] {
            img src=(project.image) alt=(project.title);
            span.category { (project.category) }
            h3 { a href={ "/portfolio/" (project.id) } { (project.title) } }
            p.subtitle { (project.subtitle) }
        }
    }
}

fn blog_card(post: &BlogPost) -> Markup {
    html! {
        article.blog-card {
            img src=(post.image) alt=(post.title);
            p.meta {
                time datetime=(post.published_at.to_rfc3339()) { (post.display_date) }
                " · " (post.category)
            }
            h3 { a href={ "/blog/" (post.id) } { (post.title) } }
            p { (post.excerpt) }
        }
    }
}

fn contact_section(form: &ContactFormView<'_>) -> Markup {
    html! {
        section #contact .contact {
            h2 { "Get in touch" }
            @if form.sent {
                p.success { "Thank you! Your message has been sent. I will get back to you soon." }
            }
            form method="post" action="/contact" {
                label for="name" { "Name" }
                input #name type="text" name="name" maxlength="120" value=(form.values.name) required;
                (field_errors(form.errors, "name"))

                label for="email" { "Email" }
                input #email type="email" name="email" value=(form.values.email) required;
                (field_errors(form.errors, "email"))

                label for="inquiry" { "Subject" }
                input #inquiry type="text" name="inquiry" maxlength="70" value=(form.values.inquiry) required;
                (field_errors(form.errors, "inquiry"))

                label for="message" { "Message" }
                textarea #message name="message" rows="6" required { (form.values.message) }
                (field_errors(form.errors, "message"))

                button type="submit" { "Send message" }
            }
        }
    }
}

/// The one-page home layout. About, services, contact and success reuse it
/// with a different scroll target.
pub fn home(page: &Page<'_>, content: HomeContent<'_>, form: ContactFormView<'_>) -> Markup {
    document(
        page,
        html! {
            section #home .hero {
                h1 { "Samuel Adomeh" }
                p.lead { "Senior DevOps Engineer" }
            }
            section #about .about {
                h2 { "About me" }
                p {
                    "Over a decade of turning complex delivery workflows into automated, "
                    "observable pipelines across AWS, Azure and GCP."
                }
            }
            section #service .services {
                h2 { "Services" }
                @for service in content.services {
                    (service_card(service))
                }
            }
            section #project-gallery .projects {
                h2 { "Works" }
                @for project in content.projects {
                    (project_card(project))
                }
            }
            @if !content.preview.is_empty() {
                section #blog .blog-preview {
                    h2 { "Latest posts" }
                    @for post in content.preview {
                        (blog_card(post))
                    }
                    a.btn href="/blog" { "All posts" }
                }
            }
            (contact_section(&form))
        },
    )
}

pub fn works(page: &Page<'_>, projects: &[PortfolioProject]) -> Markup {
    document(
        page,
        html! {
            section #project-gallery .projects {
                h2 { "Works" }
                @for project in projects {
                    (project_card(project))
                }
            }
        },
    )
}

pub fn blog_list(page: &Page<'_>, posts: &[BlogPost]) -> Markup {
    document(
        page,
        html! {
            section #blog .blog-list {
                h2 { "Blog" }
                @for post in posts.iter().filter(|p| p.is_published) {
                    (blog_card(post))
                }
            }
        },
    )
}

pub fn blog_detail(post: &BlogPost, views: i64, related: &[&BlogPost], recent: &[BlogPost]) -> Markup {
    let page = Page::new(&post.title, "/blog").description(&post.meta_description);
    document(
        &page,
        html! {
            article.blog-detail {
                img.featured src=(post.image) alt=(post.title);
                p.meta {
                    span.author { (post.author) }
                    " · "
                    time datetime=(post.published_at.to_rfc3339()) { (post.display_date) }
                    " · " (post.reading_time()) " min read"
                    " · " (views) " views"
                }
                h1 { (post.title) }
                (tag_list(&post.tags))
                div.content { (PreEscaped(&post.content)) }
            }
            @if !related.is_empty() {
                section.related-posts {
                    h3 { "Related posts" }
                    @for other in related {
                        (blog_card(other))
                    }
                }
            }
            aside.recent-posts {
                h4 { "Recent posts" }
                ul {
                    @for other in recent.iter().filter(|p| p.id != post.id && p.is_published).take(3) {
                        li {
                            a href={ "/blog/" (other.id) } { (other.title) }
                            " " time { (other.display_date) }
                        }
                    }
                }
            }
        },
    )
}

pub fn portfolio_detail(project: &PortfolioProject, all: &[PortfolioProject]) -> Markup {
    let page = Page::new(&project.title, "/works").description(&project.meta_description);
    document(
        &page,
        html! {
            article.portfolio-detail {
                img.featured src=(project.image) alt=(project.title);
                span.category { (project.category) }
                h1 { (project.title) }
                p.subtitle { (project.subtitle) }
                p { (project.description) }
                h3 { "The challenge" }
                p { (project.challenge) }
                h3 { "The solution" }
                p { (project.solution) }
                h3 { "Results" }
                p { (project.results) }
                @if !project.tags.is_empty() {
                    ul.technologies {
                        @for tag in &project.tags {
                            li { (tag.name) }
                        }
                    }
                }
            }
            nav.other-projects {
                @for other in all.iter().filter(|p| p.id != project.id).take(3) {
                    a href={ "/portfolio/" (other.id) } { (other.title) }
                }
            }
        },
    )
}

pub fn service_detail(service: &Service, all: &[Service]) -> Markup {
    let page = Page::new(&service.title, "/services").description(&service.description);
    document(
        &page,
        html! {
            article.service-detail {
                h1 { (service.title) }
                p.lead { (service.description) }
                div.content { (PreEscaped(&service.detailed_description)) }
                @if !service.process.is_empty() {
                    h3 { "Process" }
                    ol.process {
                        @for step in &service.process {
                            li { (step) }
                        }
                    }
                }
                @if !service.technologies.is_empty() {
                    h3 { "Technologies" }
                    ul.technologies {
                        @for tech in &service.technologies {
                            li { (tech) }
                        }
                    }
                }
            }
            aside.all-services {
                h4 { "All services" }
                ul {
                    @for other in all {
                        li.active[other.id == service.id] {
                            a href={ "/service/" (other.id) } { (other.title) }
                        }
                    }
                }
            }
        },
    )
}
