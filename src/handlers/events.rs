// src/handlers/events.rs
// DOCUMENTATION: HTTP handlers for event operations
// PURPOSE: Parse requests, call services, return responses

use crate::config::Config;
use crate::errors::BackendError;
use crate::handlers::auth;
use crate::models::{CreateEventRequest, EventListQuery, UpdateEventRequest};
use crate::services::EventService;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /events
/// Without credentials this is the website listing: visible events, newest
/// first, public DTO, unpaginated. With an api key it becomes the bot
/// listing: past-year window, pagination, and the photo-dump folder URL.
pub async fn list_events(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    query: web::Query<EventListQuery>,
) -> Result<impl Responder, BackendError> {
    if auth::has_api_credential(&req) {
        // A present auth header means the caller wants the bot endpoint, so
        // the key must actually check out.
        auth::verify_api_key(&req, &config)?;
        let page = EventService::list_for_bot(pool.get_ref(), query.page, query.page_size).await?;
        return Ok(HttpResponse::Ok().json(page));
    }

    let events = EventService::list_public(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(events))
}

/// POST /events
/// Create a new event (admin)
pub async fn create_event(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateEventRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_admin_token(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let event = EventService::create(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(event))
}

/// PUT /events/{id}
/// Update an event (admin)
pub async fn update_event(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdateEventRequest>,
) -> Result<impl Responder, BackendError> {
    auth::verify_admin_token(&req, &config)?;

    let event = EventService::update(pool.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(event))
}

/// DELETE /events/{id}
/// Delete an event (admin)
pub async fn delete_event(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, BackendError> {
    auth::verify_admin_token(&req, &config)?;

    EventService::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for event routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .route("", web::get().to(list_events))
            .route("", web::post().to(create_event))
            .route("/{id}", web::put().to(update_event))
            .route("/{id}", web::delete().to(delete_event)),
    );
}
