//! CV download.

use actix_web::{
    HttpResponse,
    http::header::{ContentDisposition, DispositionParam, DispositionType},
    web,
};

use crate::middleware::error::{AppError, AppResult};
use crate::render::cv::{self, CV_FILENAME};
use crate::state::AppState;

/// GET /download-cv
pub async fn download_cv(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let catalog = state.catalog.clone();

    let pdf = web::block(move || cv::render(catalog.services().get_all(), catalog.skills().get_all()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::debug!(bytes = pdf.len(), "CV generated");

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(CV_FILENAME.to_string())],
        })
        .body(pdf))
}
