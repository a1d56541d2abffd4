//! `/api/skills`

use actix_web::{HttpResponse, web};

use leumas_core::ContentKind;
use leumas_core::content::SkillQuery;
use leumas_shared::dto::SkillDto;

use crate::handlers::pages::empty_collection;
use crate::middleware::error::AppResult;
use crate::presenters;
use crate::state::AppState;

/// GET /api/skills
pub async fn list(state: web::Data<AppState>, query: web::Query<SkillQuery>) -> HttpResponse {
    let body: Vec<SkillDto> = query
        .apply(state.catalog.skills())
        .into_iter()
        .map(presenters::skill)
        .collect();

    HttpResponse::Ok().json(body)
}

/// GET /api/skills/{id} - unknown ids return the first skill.
pub async fn detail(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let skill = state
        .catalog
        .skills()
        .resolve(&path)
        .ok_or_else(|| empty_collection(ContentKind::Skill))?;

    Ok(HttpResponse::Ok().json(presenters::skill(skill)))
}
