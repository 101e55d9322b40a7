// src/db/member_repository.rs
// DOCUMENTATION: Member database operations
// PURPOSE: Abstract member storage from business logic

use crate::errors::BackendError;
use crate::models::{CreateMemberRequest, Member, UpdateMemberRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// MemberRepository: All database operations for members
pub struct MemberRepository;

impl MemberRepository {
    /// Create a new member
    /// DOCUMENTATION: Used by the admin surface; the drive image id has
    /// already been derived by the caller
    pub async fn create(
        pool: &PgPool,
        req: &CreateMemberRequest,
        image_id: Option<String>,
    ) -> Result<Member, BackendError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (
                first_name, last_name, dob, email,
                telegram_username, telegram_id, phone, gender,
                family_id, is_admin, is_active, image_id,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, true, $11, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.dob)
        .bind(&req.email)
        .bind(&req.telegram_username)
        .bind(&req.telegram_id)
        .bind(&req.phone)
        .bind(&req.gender)
        .bind(req.family_id)
        .bind(req.is_admin)
        .bind(&image_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create member: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Created member with id: {}", member.id);
        Ok(member)
    }

    /// Retrieve member by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Member, BackendError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching member: {}", e);
                BackendError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Member not found: {}", id);
                BackendError::NotFound(format!("Member '{}'", id))
            })
    }

    /// Retrieve member by chat-platform handle
    /// DOCUMENTATION: Case-insensitive to accommodate data entry
    /// inconsistencies in imported rosters
    pub async fn get_by_telegram_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Member, BackendError> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE LOWER(telegram_username) = LOWER($1)",
        )
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching member by username: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Member not found with username: {}", username);
            BackendError::NotFound(format!("Member '{}'", username))
        })
    }

    /// Retrieve member by chat-platform id
    pub async fn get_by_telegram_id(
        pool: &PgPool,
        telegram_id: &str,
    ) -> Result<Member, BackendError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE telegram_id = $1")
            .bind(telegram_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching member by telegram id: {}", e);
                BackendError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Member not found with telegram id: {}", telegram_id);
                BackendError::NotFound(format!("Member '{}'", telegram_id))
            })
    }

    /// Update existing member
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateMemberRequest,
    ) -> Result<Member, BackendError> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name),
                dob = COALESCE($3, dob),
                email = COALESCE($4, email),
                telegram_username = COALESCE($5, telegram_username),
                telegram_id = COALESCE($6, telegram_id),
                phone = COALESCE($7, phone),
                gender = COALESCE($8, gender),
                family_id = COALESCE($9, family_id),
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.dob)
        .bind(&req.email)
        .bind(&req.telegram_username)
        .bind(&req.telegram_id)
        .bind(&req.phone)
        .bind(&req.gender)
        .bind(req.family_id)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for member {}: {}", id, e);
            BackendError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| BackendError::NotFound(format!("Member '{}'", id)))?;

        log::info!("Updated member: {}", id);
        Ok(member)
    }

    /// Titles of events the member is linked to, newest first
    pub async fn event_titles(pool: &PgPool, member_id: Uuid) -> Result<Vec<String>, BackendError> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT e.title
            FROM events e
            JOIN event_participants ep ON ep.event_id = e.id
            WHERE ep.member_id = $1
            ORDER BY e.start_date DESC
            "#,
        )
        .bind(member_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch event titles for member {}: {}", member_id, e);
            BackendError::DatabaseError(e.to_string())
        })
    }

    /// Mark members inactive in bulk (admin action)
    pub async fn deactivate(pool: &PgPool, ids: &[Uuid]) -> Result<u64, BackendError> {
        let rows = sqlx::query(
            "UPDATE members SET is_active = false, updated_at = NOW() WHERE id = ANY($1)",
        )
        .bind(ids)
        .execute(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to deactivate members: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?
        .rows_affected();

        log::info!("Marked {} members inactive", rows);
        Ok(rows)
    }
}
