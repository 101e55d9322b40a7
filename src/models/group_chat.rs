// src/models/group_chat.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Registered group chat
/// The id is the chat-platform identifier and is supplied by the bot
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GroupChat {
    pub id: i64,
    pub title: String,
}

/// Request to register a new group chat
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGroupChatRequest {
    pub id: i64,

    #[validate(length(min = 1, max = 30))]
    pub title: String,
}

/// Request to rename a group chat
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateGroupChatRequest {
    #[validate(length(min = 1, max = 30))]
    pub title: String,
}
