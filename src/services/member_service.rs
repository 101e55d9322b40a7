// src/services/member_service.rs
// DOCUMENTATION: Business logic for members
// PURPOSE: Bot-facing lookups and updates, admin-facing creation

use crate::db::{FamilyRepository, MemberRepository};
use crate::errors::BackendError;
use crate::models::{CreateMemberRequest, Member, MemberResponse, UpdateMemberRequest};
use crate::services::drive;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MemberService;

impl MemberService {
    /// Create a new member (admin surface)
    pub async fn create(
        pool: &PgPool,
        req: CreateMemberRequest,
    ) -> Result<MemberResponse, BackendError> {
        let image_id = req.image_url.as_deref().and_then(drive::extract_file_id);
        let member = MemberRepository::create(pool, &req, image_id).await?;
        Self::to_response(pool, member).await
    }

    /// Look up a member by chat-platform handle (case-insensitive)
    pub async fn get_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<MemberResponse, BackendError> {
        let member = MemberRepository::get_by_telegram_username(pool, username).await?;
        Self::to_response(pool, member).await
    }

    /// Look up a member by chat-platform id
    pub async fn get_by_telegram_id(
        pool: &PgPool,
        telegram_id: &str,
    ) -> Result<MemberResponse, BackendError> {
        let member = MemberRepository::get_by_telegram_id(pool, telegram_id).await?;
        Self::to_response(pool, member).await
    }

    /// Partial update addressed by chat-platform handle
    pub async fn update_by_username(
        pool: &PgPool,
        username: &str,
        req: UpdateMemberRequest,
    ) -> Result<MemberResponse, BackendError> {
        let member = MemberRepository::get_by_telegram_username(pool, username).await?;
        let member = MemberRepository::update(pool, member.id, &req).await?;
        Self::to_response(pool, member).await
    }

    /// Partial update addressed by chat-platform id
    pub async fn update_by_telegram_id(
        pool: &PgPool,
        telegram_id: &str,
        req: UpdateMemberRequest,
    ) -> Result<MemberResponse, BackendError> {
        let member = MemberRepository::get_by_telegram_id(pool, telegram_id).await?;
        let member = MemberRepository::update(pool, member.id, &req).await?;
        Self::to_response(pool, member).await
    }

    /// Mark members inactive in bulk (admin action)
    pub async fn deactivate(pool: &PgPool, ids: &[Uuid]) -> Result<u64, BackendError> {
        if ids.is_empty() {
            return Err(BackendError::InvalidInput(
                "No member ids provided".to_string(),
            ));
        }
        MemberRepository::deactivate(pool, ids).await
    }

    /// Flatten a member row into the bot DTO.
    /// The family is resolved to its name and events to their titles.
    async fn to_response(pool: &PgPool, member: Member) -> Result<MemberResponse, BackendError> {
        let family = match member.family_id {
            Some(family_id) => Some(FamilyRepository::get_by_id(pool, family_id).await?.name),
            None => None,
        };
        let events = MemberRepository::event_titles(pool, member.id).await?;

        Ok(member.to_response(family, events))
    }
}
