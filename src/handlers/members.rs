// src/handlers/members.rs
// DOCUMENTATION: HTTP handlers for member lookups
// PURPOSE: Bot-facing member retrieval and updates by chat-platform handle or id

use crate::config::Config;
use crate::errors::BackendError;
use crate::handlers::auth;
use crate::models::UpdateMemberRequest;
use crate::services::MemberService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /members/u/{telegram_username}
/// Case insensitive to accommodate data entry inconsistencies
pub async fn get_by_username(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    let member = MemberService::get_by_username(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(member))
}

/// PATCH /members/u/{telegram_username}
pub async fn update_by_username(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateMemberRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    let member =
        MemberService::update_by_username(pool.get_ref(), &path.into_inner(), body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(member))
}

/// GET /members/i/{telegram_id}
pub async fn get_by_telegram_id(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    let member = MemberService::get_by_telegram_id(pool.get_ref(), &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(member))
}

/// PATCH /members/i/{telegram_id}
pub async fn update_by_telegram_id(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateMemberRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    let member = MemberService::update_by_telegram_id(
        pool.get_ref(),
        &path.into_inner(),
        body.into_inner(),
    )
    .await?;
    Ok(HttpResponse::Ok().json(member))
}

/// Configuration for member routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("/u/{username}", web::get().to(get_by_username))
            .route("/u/{username}", web::patch().to(update_by_username))
            .route("/i/{telegram_id}", web::get().to(get_by_telegram_id))
            .route("/i/{telegram_id}", web::patch().to(update_by_telegram_id)),
    );
}
