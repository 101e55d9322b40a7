// src/models/family.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Points family that members belong to
/// DOCUMENTATION: Total points are never stored on this row - they are a pure
/// read-time reduction over the family's submissions plus the adjustment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Family {
    pub id: Uuid,
    pub name: String,

    /// Manual correction applied on top of the submission sum (may be negative)
    pub points_adjustment: f64,
}

/// Request to create a new family
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFamilyRequest {
    #[validate(length(min = 1, max = 30))]
    pub name: String,

    #[serde(default)]
    pub points_adjustment: f64,
}

/// Request to update an existing family
/// Only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateFamilyRequest {
    pub name: Option<String>,
    pub points_adjustment: Option<f64>,
}

/// Leaderboard entry exposed via API
#[derive(Debug, Serialize)]
pub struct FamilyResponse {
    pub id: Uuid,
    pub name: String,

    /// Aggregated total, computed at read time
    pub points: f64,
}

impl Family {
    /// Convert Family plus its aggregated total into the leaderboard DTO
    pub fn to_response(&self, points: f64) -> FamilyResponse {
        FamilyResponse {
            id: self.id,
            name: self.name.clone(),
            points,
        }
    }
}
