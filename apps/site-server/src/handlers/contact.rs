//! Contact form.

use actix_web::{HttpResponse, http::header, web};

use leumas_core::services::ContactForm;
use leumas_core::{DomainError, FieldErrors};

use super::pages::{home_page, html, html_with};
use crate::middleware::error::AppResult;
use crate::render::Page;
use crate::render::pages::ContactFormView;
use crate::state::AppState;

fn contact_view(state: &AppState, values: &ContactForm, errors: &FieldErrors, sent: bool) -> maud::Markup {
    let page = Page::new("Contact", "/contact").scroll_to("contact");
    home_page(state, &page, false, ContactFormView { values, errors, sent })
}

/// GET /contact
pub async fn contact_page(state: web::Data<AppState>) -> HttpResponse {
    html(contact_view(&state, &ContactForm::default(), &FieldErrors::new(), false))
}

/// POST /contact
///
/// Valid submissions redirect to the success page; invalid ones re-render
/// the form with the submitted values and per-field errors.
pub async fn submit_contact(state: web::Data<AppState>, form: web::Form<ContactForm>) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    match state.contact.submit(&form).await {
        Ok(_) => Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, "/success/"))
            .finish()),
        Err(DomainError::Validation(errors)) => Ok(html_with(
            HttpResponse::BadRequest(),
            contact_view(&state, &form, &errors, false),
        )),
        Err(e) => Err(e.into()),
    }
}

/// GET /success/
pub async fn success(state: web::Data<AppState>) -> HttpResponse {
    html(contact_view(&state, &ContactForm::default(), &FieldErrors::new(), true))
}

#[cfg(test)]
mod tests {
    use crate::state::testing;
    use actix_web::{App, http::StatusCode, test};
    use leumas_infra::RecordingMailer;
    use std::sync::Arc;

    const VALID: &str = "name=Alice&email=a%40x.io&inquiry=Hi&message=Hello";

    #[actix_rt::test]
    async fn valid_submission_redirects_and_sends_two_messages() {
        let mailer = Arc::new(RecordingMailer::new());
        let state = testing::state(mailer.clone());
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload(VALID)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get("location").unwrap(), "/success/");

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent.iter().any(|m| m.to == testing::OPERATOR && m.subject == "Contact form: Hi"));
        assert!(sent.iter().any(|m| m.to == "a@x.io" && m.subject == "Thanks for contacting Samuel Adomeh"));

        let req = test::TestRequest::get().uri("/success/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("Your message has been sent"));
        assert!(body.contains(r#"data-scroll-to="contact""#));
    }

    #[actix_rt::test]
    async fn invalid_submission_rerenders_with_errors() {
        let mailer = Arc::new(RecordingMailer::new());
        let state = testing::state(mailer.clone());
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("name=Alice&email=not-an-email&inquiry=Hi&message=")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains("Enter a valid email address."));
        assert!(body.contains("This field is required."));
        assert!(body.contains(r#"value="Alice""#));
        assert!(mailer.sent().is_empty());
    }

    #[cfg(feature = "rate-limit")]
    #[actix_rt::test]
    async fn sixth_submission_from_one_peer_is_rate_limited() {
        use crate::state::RateLimiters;
        use leumas_infra::{InMemoryRateLimiter, RateLimitConfig};

        let mailer = Arc::new(RecordingMailer::new());
        let limiters = RateLimiters {
            contact: Arc::new(InMemoryRateLimiter::new(RateLimitConfig::per_minute(5))),
            ..RateLimiters::allow_all()
        };
        let state = testing::state_with_limiters(mailer.clone(), limiters);
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        // a fresh forwarding header on every request must not reset the count
        let post = |i: u8| {
            test::TestRequest::post()
                .uri("/contact")
                .peer_addr("198.51.100.4:5000".parse().unwrap())
                .insert_header(("x-forwarded-for", format!("10.0.0.{i}")))
                .insert_header(("content-type", "application/x-www-form-urlencoded"))
                .set_payload(VALID)
                .to_request()
        };

        for i in 0..5 {
            assert_eq!(test::call_service(&app, post(i)).await.status(), StatusCode::SEE_OTHER);
        }
        let res = test::call_service(&app, post(5)).await;
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
        assert!(res.headers().contains_key("retry-after"));
        assert_eq!(mailer.sent().len(), 10);
    }
}
