// src/models/event.rs
// DOCUMENTATION: Core data structures for events
// PURPOSE: Defines the event record and the public/bot response split

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::services::drive;

/// Represents a complete event record from the database
/// DOCUMENTATION: This struct maps directly to the events table in PostgreSQL
/// Participants live in the event_participants join table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Event title
    pub title: String,

    /// When the event starts
    pub start_date: DateTime<Utc>,

    /// When the event ends (open-ended events leave this unset)
    pub end_date: Option<DateTime<Utc>>,

    /// Where the event takes place
    pub venue: String,

    /// Free-form description
    pub description: String,

    /// Sign-up or info link
    pub link: Option<String>,

    /// Whether the event shows up on the website
    pub visible: bool,

    /// Cached drive file id of the cover image (do not edit by hand)
    pub image_id: Option<String>,

    /// Drive folder holding the event's photo dump
    pub image_folder_id: Option<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new event
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 30))]
    pub title: String,

    pub start_date: DateTime<Utc>,

    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,

    pub venue: String,

    #[serde(default)]
    pub description: String,

    #[validate(url)]
    #[serde(default)]
    pub link: Option<String>,

    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Image id or a drive download URL the id can be stripped from
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub image_folder_id: Option<String>,
}

fn default_visible() -> bool {
    true
}

/// Request DTO for updating an existing event
/// All fields are optional - only provided fields are updated
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub visible: Option<bool>,
    pub image_folder_id: Option<String>,
}

/// Read-only event DTO for the website
/// DOCUMENTATION: The image field is derived from the cached drive id so the
/// drive service is never called on the read path
#[derive(Debug, Serialize)]
pub struct EventPublicResponse {
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub venue: String,
    pub description: String,
    pub image: Option<String>,
    pub link: Option<String>,
}

/// Read-only event DTO for the bot
/// DOCUMENTATION: Adds the photo-dump folder URL the bot hands out
#[derive(Debug, Serialize)]
pub struct EventBotResponse {
    pub id: Uuid,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub venue: String,
    pub description: String,
    pub link: Option<String>,
    pub image_folder_url: Option<String>,
}

/// Paginated event listing for the bot
#[derive(Debug, Serialize)]
pub struct EventPage {
    pub data: Vec<EventBotResponse>,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub has_more: bool,
}

/// Query parameters for GET /events
#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    /// Page number (1-based, bot path only)
    pub page: Option<i64>,

    /// Results per page (max 100, bot path only)
    pub page_size: Option<i64>,
}

impl Event {
    /// Convert Event to the website DTO
    pub fn to_public_response(&self) -> EventPublicResponse {
        EventPublicResponse {
            title: self.title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            venue: self.venue.clone(),
            description: self.description.clone(),
            image: self.image_id.as_deref().map(drive::image_url),
            link: self.link.clone(),
        }
    }

    /// Convert Event to the bot DTO
    pub fn to_bot_response(&self) -> EventBotResponse {
        EventBotResponse {
            id: self.id,
            title: self.title.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            venue: self.venue.clone(),
            description: self.description.clone(),
            link: self.link.clone(),
            image_folder_url: self.image_folder_id.as_deref().map(drive::folder_url),
        }
    }
}
