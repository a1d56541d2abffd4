//! `/api/portfolio`

use actix_web::{HttpResponse, web};

use leumas_core::ContentKind;
use leumas_core::content::PortfolioQuery;
use leumas_shared::dto::PortfolioSummary;

use crate::handlers::pages::empty_collection;
use crate::middleware::error::AppResult;
use crate::presenters;
use crate::state::AppState;

/// GET /api/portfolio
pub async fn list(state: web::Data<AppState>, query: web::Query<PortfolioQuery>) -> HttpResponse {
    let body: Vec<PortfolioSummary> = query
        .apply(state.catalog.projects())
        .into_iter()
        .map(presenters::portfolio_summary)
        .collect();

    HttpResponse::Ok().json(body)
}

/// GET /api/portfolio/featured
pub async fn featured(state: web::Data<AppState>) -> HttpResponse {
    let body: Vec<PortfolioSummary> = state
        .catalog
        .projects()
        .iter()
        .filter(|p| p.is_featured)
        .map(presenters::portfolio_summary)
        .collect();

    HttpResponse::Ok().json(body)
}

/// GET /api/portfolio/{id} - unknown ids return the first project.
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let project = state
        .catalog
        .projects()
        .resolve(&path)
        .ok_or_else(|| empty_collection(ContentKind::Portfolio))?;

    Ok(HttpResponse::Ok().json(presenters::portfolio_detail(project)))
}
