// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for review and maintenance operations
// PURPOSE: Expose the admin panel's hooks via REST endpoints

use crate::config::Config;
use crate::db::SubmissionRepository;
use crate::errors::BackendError;
use crate::handlers::auth::verify_admin_token;
use crate::models::{
    CreateFamilyRequest, CreateMemberRequest, UpdateFamilyRequest, UpdateSubmissionRequest,
};
use crate::services::{DriveClient, EventService, FamilyService, MemberService, SubmissionService};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Request body for bulk id actions (vetting, deactivation)
#[derive(Debug, Deserialize)]
pub struct BulkIdsRequest {
    pub ids: Vec<Uuid>,
}

/// Response for bulk id actions
#[derive(Debug, Serialize)]
pub struct BulkActionResponse {
    pub affected: u64,
}

/// Request body for replacing an event's participants
#[derive(Debug, Deserialize)]
pub struct SetParticipantsRequest {
    pub member_ids: Vec<Uuid>,
}

/// Query parameters for the drive listing
#[derive(Debug, Deserialize)]
pub struct DriveListQuery {
    pub folder: Option<String>,
}

/// POST /admin/submissions/vet
/// Mark submissions as vetted in bulk
///
/// DOCUMENTATION: Mirrors the reviewer workflow; vetting never recomputes or
/// otherwise touches scores
pub async fn vet_submissions(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<BulkIdsRequest>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    let affected = SubmissionService::vet(pool.get_ref(), &body.ids).await?;
    Ok(HttpResponse::Ok().json(BulkActionResponse { affected }))
}

/// POST /admin/members/deactivate
/// Mark members as inactive in bulk
pub async fn deactivate_members(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<BulkIdsRequest>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    let affected = MemberService::deactivate(pool.get_ref(), &body.ids).await?;
    Ok(HttpResponse::Ok().json(BulkActionResponse { affected }))
}

/// POST /admin/members
/// Create a member from the admin surface
pub async fn create_member(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateMemberRequest>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let member = MemberService::create(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(member))
}

/// POST /admin/families
pub async fn create_family(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    body: web::Json<CreateFamilyRequest>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let family = FamilyService::create(pool.get_ref(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(family))
}

/// PUT /admin/families/{id}
/// Rename a family or correct its points adjustment
pub async fn update_family(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdateFamilyRequest>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    let family =
        FamilyService::update(pool.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(family))
}

/// DELETE /admin/families/{id}
pub async fn delete_family(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    FamilyService::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /admin/events/{id}/participants
/// Replace the participant set of an event
pub async fn set_event_participants(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<SetParticipantsRequest>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    EventService::set_participants(pool.get_ref(), path.into_inner(), &body.member_ids).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /admin/submissions/{id}
/// Fetch one submission for review
pub async fn get_submission(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    let submission = SubmissionRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(submission.to_response()))
}

/// PUT /admin/submissions/{id}
/// Direct administrative edit of a submission
pub async fn update_submission(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    body: web::Json<UpdateSubmissionRequest>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    if let Err(e) = body.validate() {
        return Err(BackendError::ValidationError(e.to_string()));
    }

    let submission =
        SubmissionService::update(pool.get_ref(), path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(submission))
}

/// GET /admin/stats
/// Get database statistics
///
/// DOCUMENTATION: Returns entity counts plus the current leaderboard
pub async fn database_stats(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    let total_members: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| BackendError::DatabaseError(e.to_string()))?;

    let active_members: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM members WHERE is_active = true")
            .fetch_one(pool.get_ref())
            .await
            .map_err(|e| BackendError::DatabaseError(e.to_string()))?;

    let total_submissions: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM photo_submissions")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| BackendError::DatabaseError(e.to_string()))?;

    let unvetted_submissions: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM photo_submissions WHERE vetted = false")
            .fetch_one(pool.get_ref())
            .await
            .map_err(|e| BackendError::DatabaseError(e.to_string()))?;

    let total_events: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
        .fetch_one(pool.get_ref())
        .await
        .map_err(|e| BackendError::DatabaseError(e.to_string()))?;

    let leaderboard = FamilyService::leaderboard(pool.get_ref()).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "members": { "total": total_members.0, "active": active_members.0 },
        "submissions": { "total": total_submissions.0, "unvetted": unvetted_submissions.0 },
        "events": { "total": total_events.0 },
        "leaderboard": leaderboard,
    })))
}

/// GET /admin/drive/files
/// List drive files, optionally restricted to one folder
///
/// DOCUMENTATION: Storage maintenance - orphaned uploads pile up when
/// submissions are deleted, this is how they get found
pub async fn list_drive_files(
    config: web::Data<Config>,
    req: HttpRequest,
    query: web::Query<DriveListQuery>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    if config.drive_api_key.is_empty() {
        return Err(BackendError::InvalidInput(
            "Drive API key not configured".to_string(),
        ));
    }

    let client = DriveClient::new(config.drive_api_key.clone());
    let files = client.list_files(query.folder.as_deref()).await?;
    Ok(HttpResponse::Ok().json(files))
}

/// GET /admin/drive/files/{id}
/// Check that a cached file id still resolves on the drive
pub async fn get_drive_file(
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    if config.drive_api_key.is_empty() {
        return Err(BackendError::InvalidInput(
            "Drive API key not configured".to_string(),
        ));
    }

    let client = DriveClient::new(config.drive_api_key.clone());
    let file = client.get_file(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(file))
}

/// DELETE /admin/drive/files/{id}
/// Delete a file from the drive
pub async fn delete_drive_file(
    config: web::Data<Config>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<impl Responder, BackendError> {
    verify_admin_token(&req, &config)?;

    if config.drive_api_key.is_empty() {
        return Err(BackendError::InvalidInput(
            "Drive API key not configured".to_string(),
        ));
    }

    let client = DriveClient::new(config.drive_api_key.clone());
    client.delete_file(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/submissions/vet", web::post().to(vet_submissions))
            .route("/submissions/{id}", web::get().to(get_submission))
            .route("/submissions/{id}", web::put().to(update_submission))
            .route("/members", web::post().to(create_member))
            .route("/members/deactivate", web::post().to(deactivate_members))
            .route("/families", web::post().to(create_family))
            .route("/families/{id}", web::put().to(update_family))
            .route("/families/{id}", web::delete().to(delete_family))
            .route(
                "/events/{id}/participants",
                web::put().to(set_event_participants),
            )
            .route("/stats", web::get().to(database_stats))
            .route("/drive/files", web::get().to(list_drive_files))
            .route("/drive/files/{id}", web::get().to(get_drive_file))
            .route("/drive/files/{id}", web::delete().to(delete_drive_file)),
    );
}
