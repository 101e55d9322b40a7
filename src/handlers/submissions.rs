// src/handlers/submissions.rs
// DOCUMENTATION: HTTP handlers for photo submissions
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::errors::BackendError;
use crate::handlers::auth;
use crate::models::CreateSubmissionRequest;
use crate::services::SubmissionService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// POST /submissions
/// Create a photo submission on behalf of a member.
/// The score is computed here only when the request carries none, and the
/// member's family is snapshotted onto the row - both land in the same write
/// as the submission itself.
pub async fn create_submission(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let submission = SubmissionService::create(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(submission))
}

/// Configuration for submission routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/submissions").route("", web::post().to(create_submission)));
}
