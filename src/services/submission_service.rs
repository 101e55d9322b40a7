// src/services/submission_service.rs
// DOCUMENTATION: Business logic for photo submissions
// PURPOSE: Intermediary between handlers and repository, owns the save-time
// scoring and family derivation

use std::str::FromStr;

use crate::db::{MemberRepository, SubmissionRepository};
use crate::errors::BackendError;
use crate::models::{
    CreateSubmissionRequest, Member, NewSubmission, SubmissionResponse, UpdateSubmissionRequest,
};
use crate::services::drive;
use crate::services::scoring::{self, SubmissionCategory};
use sqlx::PgPool;
use uuid::Uuid;

pub struct SubmissionService;

impl SubmissionService {
    /// Turn a create request into the row to persist.
    ///
    /// The category is parsed first: an out-of-set tag fails the whole call
    /// before any score is resolved or any field derived, so a rejected
    /// request leaves nothing half-built. The score is only computed when the
    /// request carries none (an explicit zero is kept as-is), and the family
    /// is snapshotted from the member at this moment.
    pub fn prepare(
        req: &CreateSubmissionRequest,
        member: &Member,
    ) -> Result<NewSubmission, BackendError> {
        let category = SubmissionCategory::from_str(&req.category)?;

        let score = scoring::score_or_computed(req.score, category, req.number_of_people);

        let image_id = req
            .image_id
            .clone()
            .or_else(|| req.image_url.as_deref().and_then(drive::extract_file_id));

        Ok(NewSubmission {
            member_id: Some(member.id),
            family_id: member.family_id,
            category,
            number_of_people: req.number_of_people,
            score,
            image_id,
        })
    }

    /// Create a new photo submission
    pub async fn create(
        pool: &PgPool,
        req: CreateSubmissionRequest,
    ) -> Result<SubmissionResponse, BackendError> {
        let member = MemberRepository::get_by_id(pool, req.member).await?;

        let new = Self::prepare(&req, &member)?;
        if member.family_id.is_none() {
            // Not an error: the submission simply belongs to no family and
            // counts toward no aggregate.
            log::warn!("Member {} has no family; submission scores into the void", member.id);
        }

        let submission = SubmissionRepository::create(pool, &new).await?;
        Ok(submission.to_response())
    }

    /// Administrative edit of a submission.
    ///
    /// The category is validated before any field is touched, so a rejected
    /// tag leaves the stored row exactly as it was. An explicit score is
    /// taken verbatim; nothing is ever recomputed here. Like every save
    /// path, the family snapshot is re-derived from the member's current
    /// family.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateSubmissionRequest,
    ) -> Result<SubmissionResponse, BackendError> {
        let mut submission = SubmissionRepository::get_by_id(pool, id).await?;

        if let Some(tag) = &req.category {
            let category = SubmissionCategory::from_str(tag)?;
            submission.category = category.as_str().to_string();
        }
        if let Some(number_of_people) = req.number_of_people {
            submission.number_of_people = number_of_people;
        }
        if let Some(score) = req.score {
            submission.score = score;
        }
        if let Some(vetted) = req.vetted {
            submission.vetted = vetted;
        }

        match submission.member_id {
            Some(member_id) => {
                let member = MemberRepository::get_by_id(pool, member_id).await?;
                submission.sync_family(&member);
            }
            // The member is gone: the submission belongs to no family now.
            None => submission.family_id = None,
        }

        let submission = SubmissionRepository::update(pool, &submission).await?;
        Ok(submission.to_response())
    }

    /// Mark submissions as vetted (admin review action)
    pub async fn vet(pool: &PgPool, ids: &[Uuid]) -> Result<u64, BackendError> {
        if ids.is_empty() {
            return Err(BackendError::InvalidInput(
                "No submission ids provided".to_string(),
            ));
        }
        SubmissionRepository::mark_vetted(pool, ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bot_member(family_id: Option<Uuid>) -> Member {
        Member {
            id: Uuid::new_v4(),
            first_name: None,
            last_name: None,
            dob: None,
            email: None,
            telegram_username: Some("submitter".to_string()),
            telegram_id: Some("12345".to_string()),
            phone: None,
            gender: None,
            family_id,
            is_admin: false,
            is_active: true,
            image_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request(category: &str, number_of_people: i32, score: Option<f64>) -> CreateSubmissionRequest {
        CreateSubmissionRequest {
            member: Uuid::new_v4(),
            category: category.to_string(),
            number_of_people,
            score,
            image_id: None,
            image_url: None,
        }
    }

    #[test]
    fn prepare_computes_score_when_absent() {
        let member = bot_member(Some(Uuid::new_v4()));
        let new = SubmissionService::prepare(&request("crossover", 5, None), &member).unwrap();
        assert_eq!(new.score, 50.0);
        assert_eq!(new.category, SubmissionCategory::Crossover);
    }

    #[test]
    fn prepare_keeps_explicit_score() {
        let member = bot_member(Some(Uuid::new_v4()));
        let new = SubmissionService::prepare(&request("ssa", 3, Some(0.0)), &member).unwrap();
        assert_eq!(new.score, 0.0);

        let new = SubmissionService::prepare(&request("ssa", 3, Some(99.0)), &member).unwrap();
        assert_eq!(new.score, 99.0);
    }

    #[test]
    fn prepare_snapshots_the_members_family() {
        let family = Uuid::new_v4();
        let member = bot_member(Some(family));
        let new = SubmissionService::prepare(&request("fun", 4, None), &member).unwrap();
        assert_eq!(new.family_id, Some(family));
        assert_eq!(new.member_id, Some(member.id));
    }

    #[test]
    fn prepare_accepts_a_familyless_member() {
        let member = bot_member(None);
        let new = SubmissionService::prepare(&request("random", 3, None), &member).unwrap();
        assert_eq!(new.family_id, None);
        assert_eq!(new.score, 4.0);
    }

    #[test]
    fn prepare_rejects_unknown_category_without_side_effects() {
        let member = bot_member(Some(Uuid::new_v4()));
        let req = request("groupfie", 4, None);

        let err = SubmissionService::prepare(&req, &member).unwrap_err();
        assert!(matches!(err, BackendError::InvalidCategory(_)));

        // The request itself is untouched - nothing was resolved or derived
        // for it before the rejection.
        assert_eq!(req.score, None);
        assert_eq!(req.category, "groupfie");
    }

    #[test]
    fn prepare_strips_image_id_from_download_url() {
        let member = bot_member(Some(Uuid::new_v4()));
        let mut req = request("fun", 2, None);
        req.image_url =
            Some("https://drive.google.com/uc?id=1PhotoId&export=download".to_string());

        let new = SubmissionService::prepare(&req, &member).unwrap();
        assert_eq!(new.image_id, Some("1PhotoId".to_string()));
    }

    #[test]
    fn prepare_prefers_explicit_image_id() {
        let member = bot_member(Some(Uuid::new_v4()));
        let mut req = request("fun", 2, None);
        req.image_id = Some("explicit".to_string());
        req.image_url = Some("https://drive.google.com/uc?id=other&export=download".to_string());

        let new = SubmissionService::prepare(&req, &member).unwrap();
        assert_eq!(new.image_id, Some("explicit".to_string()));
    }
}
