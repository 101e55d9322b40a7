// src/handlers/exco.rs
// DOCUMENTATION: HTTP handlers for exco profiles
// PURPOSE: Public read for the website, admin-gated writes

use crate::config::Config;
use crate::db::ExcoRepository;
use crate::errors::BackendError;
use crate::handlers::auth;
use crate::models::{CreateExcoRequest, ExcoResponse, UpdateExcoRequest};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /exco
/// Public: the website renders the committee page from this
pub async fn list_exco(pool: web::Data<PgPool>) -> Result<impl Responder, BackendError> {
    let profiles = ExcoRepository::list(pool.get_ref()).await?;
    let response: Vec<ExcoResponse> = profiles.iter().map(|p| p.to_response()).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// POST /exco (admin)
pub async fn create_exco(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateExcoRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_admin_token(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let profile = ExcoRepository::create(pool.get_ref(), &body.into_inner()).await?;
    Ok(HttpResponse::Created().json(profile.to_response()))
}

/// PUT /exco/{id} (admin)
pub async fn update_exco(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdateExcoRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_admin_token(&req, &config)?;

    let profile =
        ExcoRepository::update(pool.get_ref(), path.into_inner(), &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile.to_response()))
}

/// DELETE /exco/{id} (admin)
pub async fn delete_exco(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, BackendError> {
    auth::verify_admin_token(&req, &config)?;

    ExcoRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for exco routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/exco")
            .route("", web::get().to(list_exco))
            .route("", web::post().to(create_exco))
            .route("/{id}", web::put().to(update_exco))
            .route("/{id}", web::delete().to(delete_exco)),
    );
}
