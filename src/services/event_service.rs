// src/services/event_service.rs
// DOCUMENTATION: Business logic for events
// PURPOSE: The public/bot listing split and event management

use crate::db::EventRepository;
use crate::errors::BackendError;
use crate::models::{
    CreateEventRequest, EventBotResponse, EventPage, EventPublicResponse, UpdateEventRequest,
};
use crate::services::drive;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// The bot only lists events from the past year: there cannot be photos for
/// an event that has not happened yet, and older dumps are stale
const BOT_WINDOW_DAYS: i64 = 365;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

pub struct EventService;

impl EventService {
    /// Website listing: every visible event, newest first, no pagination
    pub async fn list_public(pool: &PgPool) -> Result<Vec<EventPublicResponse>, BackendError> {
        let events = EventRepository::list_visible(pool).await?;
        Ok(events.iter().map(|e| e.to_public_response()).collect())
    }

    /// Bot listing: visible events that started within the past year,
    /// paginated
    pub async fn list_for_bot(
        pool: &PgPool,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<EventPage, BackendError> {
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let page = page.unwrap_or(1).max(1);

        let until = Utc::now();
        let since = until - Duration::days(BOT_WINDOW_DAYS);

        let (events, total_count) =
            EventRepository::list_window(pool, since, until, page, page_size).await?;

        let data: Vec<EventBotResponse> = events.iter().map(|e| e.to_bot_response()).collect();
        let has_more = total_count > page * page_size;

        Ok(EventPage {
            data,
            total_count,
            page,
            page_size,
            has_more,
        })
    }

    /// Create a new event
    pub async fn create(
        pool: &PgPool,
        req: CreateEventRequest,
    ) -> Result<EventBotResponse, BackendError> {
        let image_id = req.image_url.as_deref().and_then(drive::extract_file_id);
        let event = EventRepository::create(pool, &req, image_id).await?;
        Ok(event.to_bot_response())
    }

    /// Update an event
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateEventRequest,
    ) -> Result<EventBotResponse, BackendError> {
        let event = EventRepository::update(pool, id, &req).await?;
        Ok(event.to_bot_response())
    }

    /// Delete an event
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), BackendError> {
        EventRepository::delete(pool, id).await
    }

    /// Replace the participant set of an event
    pub async fn set_participants(
        pool: &PgPool,
        event_id: Uuid,
        member_ids: &[Uuid],
    ) -> Result<(), BackendError> {
        // Verify the event exists so a bad id is a 404, not a silent no-op
        let _ = EventRepository::get_by_id(pool, event_id).await?;
        EventRepository::set_participants(pool, event_id, member_ids).await
    }
}
