// src/models/member.rs
// DOCUMENTATION: Core data structures for organization members
// PURPOSE: Defines serialization/deserialization models for API and database

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::services::drive;

/// Represents a complete member record from the database
/// DOCUMENTATION: This struct maps directly to the members table in PostgreSQL
/// Used for internal operations and database queries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Given name
    pub first_name: Option<String>,

    /// Family name (the surname, not the points family)
    pub last_name: Option<String>,

    /// Date of birth
    pub dob: Option<NaiveDate>,

    /// Email address (unique when present)
    pub email: Option<String>,

    /// Chat-platform handle (unique when present, matched case-insensitively)
    pub telegram_username: Option<String>,

    /// Chat-platform numeric id stored as text (unique when present)
    pub telegram_id: Option<String>,

    /// Phone number
    pub phone: Option<String>,

    /// Self-reported gender
    pub gender: Option<String>,

    /// Points family the member belongs to (nulled when the family is deleted)
    pub family_id: Option<Uuid>,

    /// Whether the member has admin rights in the organization
    pub is_admin: bool,

    /// Active flag (exited members are kept but marked inactive)
    pub is_active: bool,

    /// Cached drive file id of the profile image (do not edit by hand)
    pub image_id: Option<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new member
/// DOCUMENTATION: Data transfer object used by the admin surface
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateMemberRequest {
    #[validate(length(max = 30))]
    pub first_name: Option<String>,

    #[validate(length(max = 30))]
    pub last_name: Option<String>,

    pub dob: Option<NaiveDate>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 30))]
    pub telegram_username: Option<String>,

    #[validate(length(max = 30))]
    pub telegram_id: Option<String>,

    #[validate(length(max = 15))]
    pub phone: Option<String>,

    #[validate(length(max = 10))]
    pub gender: Option<String>,

    /// Initial points family
    #[serde(default)]
    pub family_id: Option<Uuid>,

    #[serde(default)]
    pub is_admin: bool,

    /// Image id or a drive download URL the id can be stripped from
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request DTO for updating an existing member
/// DOCUMENTATION: All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub email: Option<String>,
    pub telegram_username: Option<String>,
    pub telegram_id: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub family_id: Option<Uuid>,
}

/// Response DTO for the bot
/// DOCUMENTATION: Family is flattened to its name and events to their titles,
/// matching what the bot renders in chat
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<NaiveDate>,
    pub email: Option<String>,
    pub telegram_username: Option<String>,
    pub telegram_id: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,

    /// Name of the points family, if any
    pub family: Option<String>,

    /// Titles of the events the member has attended
    pub events: Vec<String>,

    pub is_admin: bool,
    pub is_active: bool,

    /// Embeddable image URL derived from the cached drive file id
    pub image: Option<String>,
}

impl Member {
    /// Convert Member to MemberResponse for API
    /// DOCUMENTATION: Maps database model to API response DTO
    /// The image URL is derived from the cached id - the drive service is never called
    pub fn to_response(&self, family: Option<String>, events: Vec<String>) -> MemberResponse {
        MemberResponse {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            dob: self.dob,
            email: self.email.clone(),
            telegram_username: self.telegram_username.clone(),
            telegram_id: self.telegram_id.clone(),
            phone: self.phone.clone(),
            gender: self.gender.clone(),
            family,
            events,
            is_admin: self.is_admin,
            is_active: self.is_active,
            image: self.image_id.as_deref().map(drive::image_url),
        }
    }
}
