//! Rate limiting middleware.

use actix_web::{
    Error, ResponseError,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;

use leumas_core::ports::RateLimiter;

use crate::middleware::error::AppError;

/// Rate limiting middleware factory.
///
/// Only unsafe methods count against the limit, so a resource serving both
/// `GET` and `POST` stays readable. Keys are `<scope>:<client ip>`, where the
/// client is the TCP peer unless proxy headers are trusted.
pub struct RateLimitMiddleware {
    scope: &'static str,
    limiter: Arc<dyn RateLimiter>,
    trust_proxy_headers: bool,
}

impl RateLimitMiddleware {
    pub fn new(scope: &'static str, limiter: Arc<dyn RateLimiter>) -> Self {
        Self {
            scope,
            limiter,
            trust_proxy_headers: false,
        }
    }

    /// Key on `Forwarded` / `X-Forwarded-For` instead of the peer address.
    /// Only safe behind a proxy that overwrites those headers.
    pub fn trust_proxy_headers(mut self, trust: bool) -> Self {
        self.trust_proxy_headers = trust;
        self
    }
}

/// The address a request is counted against.
fn client_addr(req: &ServiceRequest, trust_proxy_headers: bool) -> String {
    if trust_proxy_headers {
        if let Some(addr) = req.connection_info().realip_remote_addr() {
            return addr.to_string();
        }
    }
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service: Rc::new(service),
            scope: self.scope,
            limiter: self.limiter.clone(),
            trust_proxy_headers: self.trust_proxy_headers,
        }))
    }
}

pub struct RateLimitMiddlewareService<S> {
    service: Rc<S>,
    scope: &'static str,
    limiter: Arc<dyn RateLimiter>,
    trust_proxy_headers: bool,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let limiter = self.limiter.clone();
        let scope = self.scope;
        let trust_proxy_headers = self.trust_proxy_headers;

        Box::pin(async move {
            if req.method().is_safe() {
                return service.call(req).await.map(ServiceResponse::map_into_left_body);
            }

            let client = client_addr(&req, trust_proxy_headers);
            let key = format!("{scope}:{client}");

            match limiter.check(&key).await {
                Ok(result) if !result.allowed => {
                    tracing::warn!(scope, client = %client, "Rate limit exceeded");
                    let response = AppError::TooManyRequests(result.reset_after).error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
                Ok(result) => {
                    tracing::debug!(scope, remaining = result.remaining, "Rate limit check passed");
                }
                Err(e) => {
                    // fail open
                    tracing::error!(scope, error = %e, "Rate limiter error, failing open");
                }
            }

            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::StatusCode, test, web};
    use async_trait::async_trait;
    use leumas_core::ports::{RateLimitError, RateLimitResult};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Allows the first `budget` checks, records every key.
    struct Budget {
        budget: Mutex<u32>,
        keys: Mutex<Vec<String>>,
    }

    impl Budget {
        fn new(budget: u32) -> Arc<Self> {
            Arc::new(Self {
                budget: Mutex::new(budget),
                keys: Mutex::default(),
            })
        }
    }

    #[async_trait]
    impl RateLimiter for Budget {
        async fn check(&self, key: &str) -> Result<RateLimitResult, RateLimitError> {
            self.keys.lock().unwrap().push(key.to_string());
            let mut budget = self.budget.lock().unwrap();
            if *budget == 0 {
                return Ok(RateLimitResult::denied(Duration::from_secs(30)));
            }
            *budget -= 1;
            Ok(RateLimitResult::allowed(*budget))
        }
    }

    struct Broken;

    #[async_trait]
    impl RateLimiter for Broken {
        async fn check(&self, _key: &str) -> Result<RateLimitResult, RateLimitError> {
            Err(RateLimitError::Backend("down".into()))
        }
    }

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_rt::test]
    async fn posts_beyond_budget_get_429_with_retry_after() {
        let limiter = Budget::new(2);
        let app = test::init_service(
            App::new().service(
                web::resource("/contact")
                    .wrap(RateLimitMiddleware::new("contact", limiter.clone()))
                    .route(web::get().to(ok))
                    .route(web::post().to(ok)),
            ),
        )
        .await;

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/contact")
                .peer_addr("203.0.113.7:4000".parse().unwrap())
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }

        let req = test::TestRequest::post()
            .uri("/contact")
            .peer_addr("203.0.113.7:4000".parse().unwrap())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(res.headers().get("Retry-After").unwrap(), "30");

        // reads are never limited
        let req = test::TestRequest::get().uri("/contact").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let keys = limiter.keys.lock().unwrap().clone();
        assert_eq!(keys.len(), 3);
        assert!(keys.iter().all(|k| k == "contact:203.0.113.7"));
    }

    #[actix_rt::test]
    async fn forwarded_headers_do_not_change_the_key_by_default() {
        let limiter = Budget::new(5);
        let app = test::init_service(
            App::new().service(
                web::resource("/contact")
                    .wrap(RateLimitMiddleware::new("contact", limiter.clone()))
                    .route(web::post().to(ok)),
            ),
        )
        .await;

        let mut limited = 0;
        for i in 0..20 {
            let req = test::TestRequest::post()
                .uri("/contact")
                .peer_addr("198.51.100.4:5000".parse().unwrap())
                .insert_header(("x-forwarded-for", format!("10.0.0.{i}")))
                .insert_header(("forwarded", format!("for=10.0.1.{i}")))
                .to_request();
            if test::call_service(&app, req).await.status() == StatusCode::TOO_MANY_REQUESTS {
                limited += 1;
            }
        }

        assert_eq!(limited, 15);
        let keys = limiter.keys.lock().unwrap().clone();
        assert!(keys.iter().all(|k| k == "contact:198.51.100.4"));
    }

    #[actix_rt::test]
    async fn trusted_proxy_headers_identify_the_client() {
        let limiter = Budget::new(10);
        let app = test::init_service(
            App::new().service(
                web::resource("/contact")
                    .wrap(RateLimitMiddleware::new("contact", limiter.clone()).trust_proxy_headers(true))
                    .route(web::post().to(ok)),
            ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/contact")
            .peer_addr("10.1.1.1:443".parse().unwrap())
            .insert_header(("x-forwarded-for", "203.0.113.9"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::post()
            .uri("/contact")
            .peer_addr("10.1.1.1:443".parse().unwrap())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let keys = limiter.keys.lock().unwrap().clone();
        assert_eq!(keys, vec!["contact:203.0.113.9", "contact:10.1.1.1"]);
    }

    #[actix_rt::test]
    async fn limiter_errors_fail_open() {
        let app = test::init_service(
            App::new().service(
                web::resource("/subscribe")
                    .wrap(RateLimitMiddleware::new("newsletter", Arc::new(Broken)))
                    .route(web::post().to(ok)),
            ),
        )
        .await;

        let req = test::TestRequest::post().uri("/subscribe").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
