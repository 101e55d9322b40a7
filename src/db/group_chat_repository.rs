// src/db/group_chat_repository.rs
// DOCUMENTATION: Group chat database operations

use crate::errors::BackendError;
use crate::models::{CreateGroupChatRequest, GroupChat};
use sqlx::PgPool;

pub struct GroupChatRepository;

impl GroupChatRepository {
    /// Register a group chat under its chat-platform id
    pub async fn create(
        pool: &PgPool,
        req: &CreateGroupChatRequest,
    ) -> Result<GroupChat, BackendError> {
        let chat = sqlx::query_as::<_, GroupChat>(
            "INSERT INTO group_chats (id, title) VALUES ($1, $2) RETURNING *",
        )
        .bind(req.id)
        .bind(&req.title)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to register group chat {}: {}", req.id, e);
            BackendError::DatabaseError(e.to_string())
        })?;

        log::info!("Registered group chat: {}", chat.id);
        Ok(chat)
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<GroupChat>, BackendError> {
        sqlx::query_as::<_, GroupChat>("SELECT * FROM group_chats ORDER BY title ASC")
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list group chats: {}", e);
                BackendError::DatabaseError(e.to_string())
            })
    }

    pub async fn get_by_id(pool: &PgPool, id: i64) -> Result<GroupChat, BackendError> {
        sqlx::query_as::<_, GroupChat>("SELECT * FROM group_chats WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching group chat: {}", e);
                BackendError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Group chat not found: {}", id);
                BackendError::NotFound(format!("Group chat '{}'", id))
            })
    }

    pub async fn rename(pool: &PgPool, id: i64, title: &str) -> Result<GroupChat, BackendError> {
        sqlx::query_as::<_, GroupChat>(
            "UPDATE group_chats SET title = $1 WHERE id = $2 RETURNING *",
        )
        .bind(title)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Rename failed for group chat {}: {}", id, e);
            BackendError::DatabaseError(e.to_string())
        })?
        .ok_or_else(|| BackendError::NotFound(format!("Group chat '{}'", id)))
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<(), BackendError> {
        let rows = sqlx::query("DELETE FROM group_chats WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for group chat {}: {}", id, e);
                BackendError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(BackendError::NotFound(format!("Group chat '{}'", id)));
        }

        log::info!("Deleted group chat: {}", id);
        Ok(())
    }
}
