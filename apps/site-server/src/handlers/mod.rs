//! HTTP handlers and route configuration.

mod api;
mod contact;
mod cv;
mod health;
mod newsletter;
mod pages;

use actix_web::web;

use crate::middleware::rate_limit::RateLimitMiddleware;
use crate::state::AppState;

/// Configure all application routes and register the shared state.
pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::Data::new(state.clone()))
        // Pages
        .route("/", web::get().to(pages::index))
        .route("/about", web::get().to(pages::about))
        .route("/services", web::get().to(pages::services))
        .route("/works", web::get().to(pages::works))
        .route("/blog", web::get().to(pages::blog))
        .route("/blogs", web::get().to(pages::blog))
        .route("/blog/{id}", web::get().to(pages::blog_detail))
        .route("/portfolio/{id}", web::get().to(pages::portfolio_detail))
        .route("/service/{id}", web::get().to(pages::service_detail))
        .route("/download-cv", web::get().to(cv::download_cv))
        // Forms
        .service(
            web::resource("/contact")
                .wrap(
                    RateLimitMiddleware::new("contact", state.limiters.contact.clone())
                        .trust_proxy_headers(state.limiters.trust_proxy_headers),
                )
                .route(web::get().to(contact::contact_page))
                .route(web::post().to(contact::submit_contact)),
        )
        .route("/success/", web::get().to(contact::success))
        .route("/success", web::get().to(contact::success))
        .service(
            web::resource("/subscribe-newsletter")
                .wrap(
                    RateLimitMiddleware::new("newsletter", state.limiters.newsletter.clone())
                        .trust_proxy_headers(state.limiters.trust_proxy_headers),
                )
                .route(web::post().to(newsletter::subscribe_form)),
        )
        // REST API
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .configure(|api| api::configure(api, state)),
        );
}
