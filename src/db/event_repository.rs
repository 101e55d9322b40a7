// src/db/event_repository.rs
// DOCUMENTATION: Event database operations
// PURPOSE: Abstract event storage from business logic

use crate::errors::BackendError;
use crate::models::{CreateEventRequest, Event, UpdateEventRequest};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// EventRepository: All database operations for events
pub struct EventRepository;

impl EventRepository {
    /// Create a new event
    pub async fn create(
        pool: &PgPool,
        req: &CreateEventRequest,
        image_id: Option<String>,
    ) -> Result<Event, BackendError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (
                title, start_date, end_date, venue, description,
                link, visible, image_id, image_folder_id,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NOW(), NOW())
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(&req.venue)
        .bind(&req.description)
        .bind(&req.link)
        .bind(req.visible)
        .bind(&image_id)
        .bind(&req.image_folder_id)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create event: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Created event with id: {}", event.id);
        Ok(event)
    }

    /// Retrieve event by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Event, BackendError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching event: {}", e);
                BackendError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Event not found: {}", id);
                BackendError::NotFound(format!("Event '{}'", id))
            })
    }

    /// All visible events, newest first (the website listing)
    pub async fn list_visible(pool: &PgPool) -> Result<Vec<Event>, BackendError> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE visible = true ORDER BY start_date DESC",
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list events: {}", e);
            BackendError::DatabaseError(e.to_string())
        })
    }

    /// Visible events inside a start-date window, paginated, newest first
    /// DOCUMENTATION: Used by the bot's photo-dump listing
    /// Returns tuple: (results, total_count) for pagination
    pub async fn list_window(
        pool: &PgPool,
        since: DateTime<Utc>,
        until: DateTime<Utc>,
        page: i64,
        page_size: i64,
    ) -> Result<(Vec<Event>, i64), BackendError> {
        let offset = (page - 1) * page_size;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM events WHERE visible = true AND start_date >= $1 AND start_date <= $2",
        )
        .bind(since)
        .bind(until)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Count query error: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT * FROM events
            WHERE visible = true AND start_date >= $1 AND start_date <= $2
            ORDER BY start_date DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(since)
        .bind(until)
        .bind(page_size)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Event window query error: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!(
            "Event listing: {} results, {} total (page {})",
            events.len(),
            total,
            page
        );

        Ok((events, total))
    }

    /// Update existing event
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateEventRequest,
    ) -> Result<Event, BackendError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET title = COALESCE($1, title),
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                venue = COALESCE($4, venue),
                description = COALESCE($5, description),
                link = COALESCE($6, link),
                visible = COALESCE($7, visible),
                image_folder_id = COALESCE($8, image_folder_id),
                updated_at = NOW()
            WHERE id = $9
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(req.start_date)
        .bind(req.end_date)
        .bind(&req.venue)
        .bind(&req.description)
        .bind(&req.link)
        .bind(req.visible)
        .bind(&req.image_folder_id)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for event {}: {}", id, e);
            BackendError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| BackendError::NotFound(format!("Event '{}'", id)))?;

        log::info!("Updated event: {}", id);
        Ok(event)
    }

    /// Delete an event and its participant links
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), BackendError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to open transaction: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        sqlx::query("DELETE FROM event_participants WHERE event_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to clear participants of event {}: {}", id, e);
                BackendError::DatabaseError(e.to_string())
            })?;

        let rows = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Delete failed for event {}: {}", id, e);
                BackendError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(BackendError::NotFound(format!("Event '{}'", id)));
        }

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit event delete: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Deleted event: {}", id);
        Ok(())
    }

    /// Replace the participant set of an event
    pub async fn set_participants(
        pool: &PgPool,
        event_id: Uuid,
        member_ids: &[Uuid],
    ) -> Result<(), BackendError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to open transaction: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        sqlx::query("DELETE FROM event_participants WHERE event_id = $1")
            .bind(event_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to clear participants of event {}: {}", event_id, e);
                BackendError::DatabaseError(e.to_string())
            })?;

        for member_id in member_ids {
            sqlx::query("INSERT INTO event_participants (event_id, member_id) VALUES ($1, $2)")
                .bind(event_id)
                .bind(member_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    log::error!(
                        "Failed to link member {} to event {}: {}",
                        member_id,
                        event_id,
                        e
                    );
                    BackendError::DatabaseError(e.to_string())
                })?;
        }

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit participant update: {}", e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Set {} participants on event {}", member_ids.len(), event_id);
        Ok(())
    }
}
