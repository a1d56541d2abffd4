//! REST API under `/api`.

mod blogs;
mod portfolio;
mod services;
mod skills;

use actix_web::web;

use super::newsletter;
use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.route("/blogs", web::get().to(blogs::list))
        .route("/blogs/{id}", web::get().to(blogs::detail))
        .route("/blogs/{id}/related_posts", web::get().to(blogs::related))
        .route("/blogs/{id}/increment_views", web::post().to(blogs::increment_views))
        .route("/portfolio", web::get().to(portfolio::list))
        // before the `{id}` route so it is not swallowed by the fallback lookup
        .route("/portfolio/featured", web::get().to(portfolio::featured))
        .route("/portfolio/{id}", web::get().to(portfolio::detail))
        .route("/services", web::get().to(services::list))
        .route("/services/{id}", web::get().to(services::detail))
        .route("/skills", web::get().to(skills::list))
        .route("/skills/{id}", web::get().to(skills::detail))
        .service(
            web::scope("/newsletter")
                .wrap(
                    RateLimitMiddleware::new("newsletter", state.limiters.newsletter.clone())
                        .trust_proxy_headers(state.limiters.trust_proxy_headers),
                )
                .route("", web::post().to(newsletter::api_subscribe))
                .route("/unsubscribe", web::post().to(newsletter::api_unsubscribe)),
        );
}
