// src/handlers/families.rs
// DOCUMENTATION: HTTP handlers for the family leaderboard
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::errors::BackendError;
use crate::handlers::auth;
use crate::services::FamilyService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /families
/// The leaderboard: every family with its read-time aggregated points.
/// Bot only - the website gets leaderboard data through its own page.
pub async fn leaderboard(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    let board = FamilyService::leaderboard(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(board))
}

/// Configuration for family routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/families").route("", web::get().to(leaderboard)));
}
