// src/db/exco_repository.rs
// DOCUMENTATION: Exco profile database operations

use crate::errors::BackendError;
use crate::models::{CreateExcoRequest, ExcoMember, UpdateExcoRequest};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ExcoRepository;

impl ExcoRepository {
    pub async fn create(pool: &PgPool, req: &CreateExcoRequest) -> Result<ExcoMember, BackendError> {
        let exco = sqlx::query_as::<_, ExcoMember>(
            r#"
            INSERT INTO exco_members (name, role, year, major, photo_id, alt_photo_id, alt)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, role, year, major, photo_id, alt_photo_id, alt
            "#,
        )
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.year)
        .bind(&req.major)
        .bind(&req.photo_id)
        .bind(&req.alt_photo_id)
        .bind(&req.alt)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create exco profile: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Created exco profile with id: {}", exco.id);
        Ok(exco)
    }

    /// Profiles in display order (insertion order)
    pub async fn list(pool: &PgPool) -> Result<Vec<ExcoMember>, BackendError> {
        sqlx::query_as::<_, ExcoMember>(
            r#"
            SELECT id, name, role, year, major, photo_id, alt_photo_id, alt
            FROM exco_members
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list exco profiles: {}", e);
            BackendError::DatabaseError(e.to_string())
        })
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateExcoRequest,
    ) -> Result<ExcoMember, BackendError> {
        sqlx::query_as::<_, ExcoMember>(
            r#"
            UPDATE exco_members
            SET name = COALESCE($1, name),
                role = COALESCE($2, role),
                year = COALESCE($3, year),
                major = COALESCE($4, major),
                photo_id = COALESCE($5, photo_id),
                alt_photo_id = COALESCE($6, alt_photo_id),
                alt = COALESCE($7, alt)
            WHERE id = $8
            RETURNING id, name, role, year, major, photo_id, alt_photo_id, alt
            "#,
        )
        .bind(&req.name)
        .bind(&req.role)
        .bind(&req.year)
        .bind(&req.major)
        .bind(&req.photo_id)
        .bind(&req.alt_photo_id)
        .bind(&req.alt)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for exco profile {}: {}", id, e);
            BackendError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| BackendError::NotFound(format!("Exco profile '{}'", id)))
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), BackendError> {
        let rows = sqlx::query("DELETE FROM exco_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for exco profile {}: {}", id, e);
                BackendError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(BackendError::NotFound(format!("Exco profile '{}'", id)));
        }

        log::info!("Deleted exco profile: {}", id);
        Ok(())
    }
}
