//! `/api/services`

use actix_web::{HttpResponse, web};

use leumas_core::ContentKind;
use leumas_shared::dto::ServiceDto;

use crate::handlers::pages::empty_collection;
use crate::middleware::error::AppResult;
use crate::presenters;
use crate::state::AppState;

/// GET /api/services - in display order.
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let body: Vec<ServiceDto> = state.catalog.services().iter().map(presenters::service).collect();
    HttpResponse::Ok().json(body)
}

/// GET /api/services/{id} - unknown ids return the first service.
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let service = state
        .catalog
        .services()
        .resolve(&path)
        .ok_or_else(|| empty_collection(ContentKind::Service))?;

    Ok(HttpResponse::Ok().json(presenters::service(service)))
}
