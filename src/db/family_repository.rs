// src/db/family_repository.rs
// DOCUMENTATION: Family database operations
// PURPOSE: Abstract family storage from business logic

use crate::errors::BackendError;
use crate::models::{CreateFamilyRequest, Family, UpdateFamilyRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// FamilyRepository: All database operations for families
pub struct FamilyRepository;

impl FamilyRepository {
    /// Create a new family
    pub async fn create(pool: &PgPool, req: &CreateFamilyRequest) -> Result<Family, BackendError> {
        let family = sqlx::query_as::<_, Family>(
            r#"
            INSERT INTO families (name, points_adjustment)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(req.points_adjustment)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create family: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Created family with id: {}", family.id);
        Ok(family)
    }

    /// All families, ordered by name for a stable leaderboard base
    pub async fn list(pool: &PgPool) -> Result<Vec<Family>, BackendError> {
        sqlx::query_as::<_, Family>("SELECT * FROM families ORDER BY name ASC")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list families: {}", e);
                BackendError::DatabaseError(e.to_string())
            })
    }

    /// Retrieve family by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Family, BackendError> {
        sqlx::query_as::<_, Family>("SELECT * FROM families WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching family: {}", e);
                BackendError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Family not found: {}", id);
                BackendError::NotFound(format!("Family '{}'", id))
            })
    }

    /// Update existing family
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateFamilyRequest,
    ) -> Result<Family, BackendError> {
        let family = sqlx::query_as::<_, Family>(
            r#"
            UPDATE families
            SET name = COALESCE($1, name),
                points_adjustment = COALESCE($2, points_adjustment)
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&req.name)
        .bind(req.points_adjustment)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for family {}: {}", id, e);
            BackendError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| BackendError::NotFound(format!("Family '{}'", id)))?;

        log::info!("Updated family: {}", id);
        Ok(family)
    }

    /// Delete a family
    /// DOCUMENTATION: The family's submissions go with it, while its members
    /// are kept and merely unlinked. All three writes happen in one
    /// transaction so no reader sees a half-deleted family.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), BackendError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to open transaction: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        sqlx::query("DELETE FROM photo_submissions WHERE family_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to delete submissions of family {}: {}", id, e);
                BackendError::DatabaseError(e.to_string())
            })?;

        sqlx::query("UPDATE members SET family_id = NULL, updated_at = NOW() WHERE family_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to unlink members of family {}: {}", id, e);
                BackendError::DatabaseError(e.to_string())
            })?;

        let rows = sqlx::query("DELETE FROM families WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Delete failed for family {}: {}", id, e);
                BackendError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(BackendError::NotFound(format!("Family '{}'", id)));
        }

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit family delete: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Deleted family: {}", id);
        Ok(())
    }
}
