// src/services/family_service.rs
// DOCUMENTATION: Business logic for families
// PURPOSE: Leaderboard aggregation and family management

use crate::db::{FamilyRepository, SubmissionRepository};
use crate::errors::BackendError;
use crate::models::{CreateFamilyRequest, FamilyResponse, UpdateFamilyRequest};
use crate::services::scoring;
use sqlx::PgPool;
use uuid::Uuid;

pub struct FamilyService;

impl FamilyService {
    /// The leaderboard: every family with its aggregated total.
    ///
    /// Points are reduced from the current submissions on every call; there
    /// is no stored total to get out of sync. Submissions without a family
    /// are invisible here by construction.
    pub async fn leaderboard(pool: &PgPool) -> Result<Vec<FamilyResponse>, BackendError> {
        let families = FamilyRepository::list(pool).await?;

        let mut board = Vec::with_capacity(families.len());
        for family in &families {
            let scores = SubmissionRepository::scores_for_family(pool, family.id).await?;
            let points = scoring::aggregate_points(&scores, family.points_adjustment);
            board.push(family.to_response(points));
        }

        log::debug!("Computed leaderboard for {} families", board.len());
        Ok(board)
    }

    /// Create a new family
    pub async fn create(
        pool: &PgPool,
        req: CreateFamilyRequest,
    ) -> Result<FamilyResponse, BackendError> {
        let family = FamilyRepository::create(pool, &req).await?;
        // A fresh family has no submissions yet: its total is the adjustment.
        Ok(family.to_response(scoring::aggregate_points(&[], family.points_adjustment)))
    }

    /// Update a family's name or adjustment
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateFamilyRequest,
    ) -> Result<FamilyResponse, BackendError> {
        let family = FamilyRepository::update(pool, id, &req).await?;
        let scores = SubmissionRepository::scores_for_family(pool, family.id).await?;
        let points = scoring::aggregate_points(&scores, family.points_adjustment);
        Ok(family.to_response(points))
    }

    /// Delete a family
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), BackendError> {
        FamilyRepository::delete(pool, id).await
    }
}
