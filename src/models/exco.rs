// src/models/exco.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::services::drive;

/// Executive committee profile shown on the website
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExcoMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub year: Option<String>,
    pub major: Option<String>,
    pub photo_id: Option<String>,
    pub alt_photo_id: Option<String>,

    /// Alt text for the photos
    pub alt: Option<String>,
}

/// Request to create an exco profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExcoRequest {
    #[validate(length(min = 1, max = 60))]
    pub name: String,

    #[validate(length(min = 1, max = 60))]
    pub role: String,

    #[serde(default)]
    pub year: Option<String>,

    #[serde(default)]
    pub major: Option<String>,

    #[serde(default)]
    pub photo_id: Option<String>,

    #[serde(default)]
    pub alt_photo_id: Option<String>,

    #[serde(default)]
    pub alt: Option<String>,
}

/// Request to update an exco profile
/// Only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateExcoRequest {
    pub name: Option<String>,
    pub role: Option<String>,
    pub year: Option<String>,
    pub major: Option<String>,
    pub photo_id: Option<String>,
    pub alt_photo_id: Option<String>,
    pub alt: Option<String>,
}

/// Exco DTO for API responses
#[derive(Debug, Serialize)]
pub struct ExcoResponse {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub year: Option<String>,
    pub major: Option<String>,
    pub photo: Option<String>,
    pub alt_photo: Option<String>,
    pub alt: Option<String>,
}

impl ExcoMember {
    /// Convert database exco member into API response
    pub fn to_response(&self) -> ExcoResponse {
        ExcoResponse {
            id: self.id,
            name: self.name.clone(),
            role: self.role.clone(),
            year: self.year.clone(),
            major: self.major.clone(),
            photo: self.photo_id.as_deref().map(drive::image_url),
            alt_photo: self.alt_photo_id.as_deref().map(drive::image_url),
            alt: self.alt.clone(),
        }
    }
}
