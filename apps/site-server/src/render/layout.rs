//! Document shell shared by every page.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Scrolls to the element named by `data-scroll-to` once the page has loaded.
const SCROLL_TO_JS: &str = r#"document.addEventListener("DOMContentLoaded",function(){var t=document.body.dataset.scrollTo;if(t){var e=document.getElementById(t);if(e){e.scrollIntoView({behavior:"smooth"});}}});"#;

/// Posts the footer form as JSON and shows the reply.
const NEWSLETTER_JS: &str = r#"document.addEventListener("submit",function(ev){var f=ev.target;if(!f.matches("form.newsletter-form")){return;}ev.preventDefault();var out=f.querySelector(".newsletter-message");fetch(f.action,{method:"POST",headers:{"Content-Type":"application/json"},body:JSON.stringify({email:f.email.value})}).then(function(r){return r.json();}).then(function(d){out.textContent=d.message||d.detail||"";if(d.success){f.reset();}});});"#;

const NAV: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/works", "Works"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

/// Per-page head data plus the anchor to scroll to after load.
#[derive(Debug, Clone, Default)]
pub struct Page<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub scroll_to: Option<&'a str>,
    /// Path of the nav entry to highlight.
    pub current: &'a str,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, current: &'a str) -> Self {
        Self {
            title,
            current,
            ..Default::default()
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    pub fn scroll_to(mut self, anchor: &'a str) -> Self {
        self.scroll_to = Some(anchor);
        self
    }
}

fn full_title(title: &str) -> String {
    if title.is_empty() {
        "Samuel Adomeh | Senior DevOps Engineer".to_string()
    } else {
        format!("{title} | Samuel Adomeh")
    }
}

fn site_header(current: &str) -> Markup {
    html! {
        header.site-header {
            a.logo href="/" { "Samuel Adomeh" }
            nav.site-nav {
                ul {
                    @for (href, label) in NAV {
                        li {
                            a href=(href) class=[(*href == current).then_some("active")] { (label) }
                        }
                    }
                }
            }
            a.btn.download-cv href="/download-cv" { "Download CV" }
        }
    }
}

fn site_footer() -> Markup {
    html! {
        footer.site-footer {
            section.newsletter {
                h4 { "Subscribe to the newsletter" }
                form.newsletter-form method="post" action="/subscribe-newsletter" {
                    input type="email" name="email" placeholder="Your email" required;
                    button type="submit" { "Subscribe" }
                    p.newsletter-message {}
                }
            }
            p.copyright { "© Samuel Adomeh. All rights reserved." }
        }
    }
}

pub(super) fn document(page: &Page<'_>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title(page.title)) }
                @if !page.description.is_empty() {
                    meta name="description" content=(page.description);
                }
                link rel="stylesheet" href="/static/css/style.css";
            }
            body data-scroll-to=[page.scroll_to] {
                (site_header(page.current))
                main { (content) }
                (site_footer())
                script { (PreEscaped(SCROLL_TO_JS)) }
                script { (PreEscaped(NEWSLETTER_JS)) }
            }
        }
    }
}
