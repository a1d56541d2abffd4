//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::observability::RequestId;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub database: &'static str,
    pub request_id: String,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>, request_id: RequestId) -> HttpResponse {
    #[cfg(feature = "postgres")]
    let database = match &state.db {
        Some(db) if db.main.ping().await.is_ok() => "ok",
        Some(_) => "unreachable",
        None => "in-memory",
    };
    #[cfg(not(feature = "postgres"))]
    let database = {
        let _ = &state;
        "in-memory"
    };

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database,
        request_id: request_id.as_str().to_string(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing;
    use actix_web::{App, test};
    use leumas_infra::RecordingMailer;
    use std::sync::Arc;

    #[actix_rt::test]
    async fn health_reports_ok_without_database() {
        let state = testing::state(Arc::new(RecordingMailer::new()));
        let app = test::init_service(
            App::new().configure(|cfg| crate::handlers::configure_routes(cfg, &state)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "in-memory");
        assert!(!body["request_id"].as_str().unwrap().is_empty());
    }
}
