// src/handlers/chats.rs
// DOCUMENTATION: HTTP handlers for the group chat registry
// PURPOSE: Let the bot keep track of the chats it lives in

use crate::config::Config;
use crate::db::GroupChatRepository;
use crate::errors::BackendError;
use crate::handlers::auth;
use crate::models::{CreateGroupChatRequest, UpdateGroupChatRequest};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// GET /chats
pub async fn list_chats(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    let chats = GroupChatRepository::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(chats))
}

/// GET /chats/{id}
pub async fn get_chat(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    let chat = GroupChatRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(chat))
}

/// POST /chats
pub async fn register_chat(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateGroupChatRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let chat = GroupChatRepository::create(pool.get_ref(), &body.into_inner()).await?;
    Ok(HttpResponse::Created().json(chat))
}

/// PUT /chats/{id}
pub async fn rename_chat(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateGroupChatRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let chat =
        GroupChatRepository::rename(pool.get_ref(), path.into_inner(), &body.title).await?;
    Ok(HttpResponse::Ok().json(chat))
}

/// DELETE /chats/{id}
pub async fn delete_chat(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<impl Responder, BackendError> {
    auth::verify_api_key(&req, &config)?;

    GroupChatRepository::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for group chat routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/chats")
            .route("", web::get().to(list_chats))
            .route("", web::post().to(register_chat))
            .route("/{id}", web::get().to(get_chat))
            .route("/{id}", web::put().to(rename_chat))
            .route("/{id}", web::delete().to(delete_chat)),
    );
}
