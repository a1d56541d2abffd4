//! Newsletter subscription: the site form and the REST endpoints.

use actix_web::{HttpResponse, web};

use leumas_core::{DomainError, FieldErrors};
use leumas_shared::dto::{DetailResponse, NewsletterRequest, SubscribeResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Field errors for the outcomes a subscriber can fix; anything else is a server fault.
fn rejection(err: DomainError) -> Result<FieldErrors, DomainError> {
    match err {
        DomainError::InvalidEmail | DomainError::DuplicateSubscription => {
            Ok(FieldErrors::single("email", err.to_string()))
        }
        DomainError::Validation(errors) => Ok(errors),
        other => Err(other),
    }
}

/// POST /subscribe-newsletter
///
/// Accepts a form post or JSON and always answers with `{success, message, errors?}`.
pub async fn subscribe_form(
    state: web::Data<AppState>,
    body: web::Either<web::Json<NewsletterRequest>, web::Form<NewsletterRequest>>,
) -> AppResult<HttpResponse> {
    let request = match body {
        web::Either::Left(json) => json.into_inner(),
        web::Either::Right(form) => form.into_inner(),
    };

    match state.newsletter.subscribe(&request.email).await {
        Ok(_) => Ok(HttpResponse::Ok().json(SubscribeResponse::subscribed())),
        Err(err) => {
            let errors = rejection(err)?;
            Ok(HttpResponse::BadRequest().json(SubscribeResponse::rejected(errors.into_inner())))
        }
    }
}

/// POST /api/newsletter
pub async fn api_subscribe(
    state: web::Data<AppState>,
    body: web::Json<NewsletterRequest>,
) -> AppResult<HttpResponse> {
    state.newsletter.subscribe(&body.email).await?;
    Ok(HttpResponse::Created().json(DetailResponse::new("Successfully subscribed to the newsletter.")))
}

/// POST /api/newsletter/unsubscribe
///
/// Answers 200 whether or not the address was subscribed.
pub async fn api_unsubscribe(
    state: web::Data<AppState>,
    body: web::Json<NewsletterRequest>,
) -> AppResult<HttpResponse> {
    let detail = if state.newsletter.unsubscribe(&body.email).await? {
        "Successfully unsubscribed from the newsletter."
    } else {
        "This email is not subscribed to the newsletter."
    };
    Ok(HttpResponse::Ok().json(DetailResponse::new(detail)))
}

#[cfg(test)]
mod tests {
    use crate::state::testing;
    use actix_web::{App, http::StatusCode, test};
    use leumas_infra::RecordingMailer;
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[actix_rt::test]
    async fn form_subscribe_then_duplicate() {
        let mailer = Arc::new(RecordingMailer::new());
        let state = testing::state(mailer.clone());
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        let post = || {
            test::TestRequest::post()
                .uri("/subscribe-newsletter")
                .insert_header(("content-type", "application/x-www-form-urlencoded"))
                .set_payload("email=reader%40example.com")
                .to_request()
        };

        let res = test::call_service(&app, post()).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Thank you for subscribing! Check your email for updates.");

        let res = test::call_service(&app, post()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Email already subscribed or invalid.");
        assert!(body["errors"]["email"].is_array());

        // one confirmation, none for the rejected attempt
        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Newsletter subscription confirmed");
    }

    #[actix_rt::test]
    async fn form_accepts_json_and_rejects_bad_email() {
        let state = testing::state(Arc::new(RecordingMailer::new()));
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/subscribe-newsletter")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["errors"]["email"][0], "Enter a valid email address.");
    }

    #[actix_rt::test]
    async fn api_subscribe_returns_201_then_400() {
        let state = testing::state(Arc::new(RecordingMailer::failing()));
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        let subscribe = || {
            test::TestRequest::post()
                .uri("/api/newsletter")
                .set_json(json!({ "email": "ops@example.com" }))
                .to_request()
        };

        // mail failure does not fail the subscription
        let res = test::call_service(&app, subscribe()).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["detail"], "Successfully subscribed to the newsletter.");

        let res = test::call_service(&app, subscribe()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/newsletter/unsubscribe")
            .set_json(json!({ "email": "ops@example.com" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        // inactive again, so subscribing re-activates
        assert_eq!(test::call_service(&app, subscribe()).await.status(), StatusCode::CREATED);
    }
}
