// src/db/submission_repository.rs
// DOCUMENTATION: Photo submission database operations
// PURPOSE: Abstract submission storage from business logic

use crate::errors::BackendError;
use crate::models::{NewSubmission, PhotoSubmission};
use sqlx::PgPool;
use uuid::Uuid;

/// SubmissionRepository: All database operations for photo submissions
pub struct SubmissionRepository;

impl SubmissionRepository {
    /// Persist a new submission.
    /// The resolved score and the denormalized family go into the same INSERT
    /// as the row itself, so a reader aggregating points can never observe a
    /// submission without them.
    pub async fn create(
        pool: &PgPool,
        new: &NewSubmission,
    ) -> Result<PhotoSubmission, BackendError> {
        let submission = sqlx::query_as::<_, PhotoSubmission>(
            r#"
            INSERT INTO photo_submissions (
                date_uploaded, member_id, family_id,
                category, number_of_people, score, vetted, image_id
            )
            VALUES (NOW(), $1, $2, $3, $4, $5, false, $6)
            RETURNING *
            "#,
        )
        .bind(new.member_id)
        .bind(new.family_id)
        .bind(new.category.as_str())
        .bind(new.number_of_people)
        .bind(new.score)
        .bind(&new.image_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create submission: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!(
            "Created submission {} ({} x{} -> {} points)",
            submission.id,
            submission.category,
            submission.number_of_people,
            submission.score
        );
        Ok(submission)
    }

    /// Retrieve submission by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<PhotoSubmission, BackendError> {
        sqlx::query_as::<_, PhotoSubmission>("SELECT * FROM photo_submissions WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching submission: {}", e);
                BackendError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Submission not found: {}", id);
                BackendError::NotFound(format!("Submission '{}'", id))
            })
    }

    /// Scores of every submission belonging to a family.
    /// Vetted and unvetted alike - vetting does not gate aggregation.
    pub async fn scores_for_family(
        pool: &PgPool,
        family_id: Uuid,
    ) -> Result<Vec<f64>, BackendError> {
        sqlx::query_scalar::<_, f64>("SELECT score FROM photo_submissions WHERE family_id = $1")
            .bind(family_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to fetch scores for family {}: {}", family_id, e);
                BackendError::DatabaseError(e.to_string())
            })
    }

    /// Persist an administratively edited submission.
    /// The caller has already re-derived the family snapshot; score, category
    /// and family land in the same UPDATE.
    pub async fn update(
        pool: &PgPool,
        submission: &PhotoSubmission,
    ) -> Result<PhotoSubmission, BackendError> {
        sqlx::query_as::<_, PhotoSubmission>(
            r#"
            UPDATE photo_submissions
            SET category = $1,
                number_of_people = $2,
                score = $3,
                vetted = $4,
                family_id = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&submission.category)
        .bind(submission.number_of_people)
        .bind(submission.score)
        .bind(submission.vetted)
        .bind(submission.family_id)
        .bind(submission.id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for submission {}: {}", submission.id, e);
            BackendError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| BackendError::NotFound(format!("Submission '{}'", submission.id)))
    }

    /// Mark submissions as vetted in bulk (admin action).
    /// Vetting never touches the score.
    pub async fn mark_vetted(pool: &PgPool, ids: &[Uuid]) -> Result<u64, BackendError> {
        let rows = sqlx::query("UPDATE photo_submissions SET vetted = true WHERE id = ANY($1)")
            .bind(ids)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to vet submissions: {}", e);
                BackendError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        log::info!("Marked {} submissions as vetted", rows);
        Ok(rows)
    }
}
