// src/models/submission.rs
// DOCUMENTATION: Core data structures for photo submissions
// PURPOSE: Defines the scored-submission record and its API DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::Member;
use crate::services::drive;
use crate::services::scoring::SubmissionCategory;

/// Represents a complete photo submission record from the database
/// DOCUMENTATION: This struct maps directly to the photo_submissions table
/// The family column is a denormalized snapshot of the member's family taken
/// at save time - it is never edited directly
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PhotoSubmission {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// When the photo was submitted
    pub date_uploaded: DateTime<Utc>,

    /// Submitting member (nulled when the member is deleted)
    pub member_id: Option<Uuid>,

    /// Snapshot of the member's family as of the most recent save
    pub family_id: Option<Uuid>,

    /// Category tag, one of the closed set in SubmissionCategory
    pub category: String,

    /// Number of people in the photo, submitter included
    pub number_of_people: i32,

    /// Score, fixed at creation unless an admin edits it directly
    pub score: f64,

    /// Reviewer approval flag; does not affect scoring or aggregation
    pub vetted: bool,

    /// Cached drive file id of the photo (do not edit by hand)
    pub image_id: Option<String>,
}

/// Fields persisted for a brand-new submission
/// DOCUMENTATION: Built by the submission service once the category has been
/// parsed, the score resolved and the family snapshotted - written to the
/// database in a single INSERT so no reader ever observes an unset score
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub member_id: Option<Uuid>,
    pub family_id: Option<Uuid>,
    pub category: SubmissionCategory,
    pub number_of_people: i32,
    pub score: f64,
    pub image_id: Option<String>,
}

/// Request DTO for POST /submissions
/// DOCUMENTATION: The bot sends the category tag as a plain string; it is
/// parsed against the closed set before anything else is touched.
/// `score` is tri-state: omitted means auto-calculate, any explicit value
/// (zero included) is preserved verbatim
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubmissionRequest {
    /// Submitting member id
    pub member: Uuid,

    /// Category tag: ssa, random, fun, single or crossover
    pub category: String,

    /// Number of people in the photo, submitter included
    #[validate(range(min = 0))]
    pub number_of_people: i32,

    /// Explicit score override (leave out to auto-calculate)
    #[serde(default)]
    pub score: Option<f64>,

    /// Drive file id of the uploaded photo
    #[serde(default)]
    pub image_id: Option<String>,

    /// Drive download URL; the file id is stripped from it when no id is given
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request DTO for the admin edit of a submission
/// DOCUMENTATION: Direct administrative edit is the only way a score changes
/// after creation; an edit never triggers a recalculation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSubmissionRequest {
    pub category: Option<String>,

    #[validate(range(min = 0))]
    pub number_of_people: Option<i32>,

    pub score: Option<f64>,

    pub vetted: Option<bool>,
}

/// Submission DTO for API responses
#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub date_uploaded: DateTime<Utc>,
    pub member: Option<Uuid>,
    pub family: Option<Uuid>,
    pub category: String,
    pub number_of_people: i32,
    pub score: f64,
    pub vetted: bool,
    pub image: Option<String>,
}

impl PhotoSubmission {
    /// Overwrite the denormalized family reference with the member's current one.
    /// Called on every save path; the field is not settable any other way.
    pub fn sync_family(&mut self, member: &Member) {
        self.family_id = member.family_id;
    }

    /// Convert database submission into API response DTO
    pub fn to_response(&self) -> SubmissionResponse {
        SubmissionResponse {
            id: self.id,
            date_uploaded: self.date_uploaded,
            member: self.member_id,
            family: self.family_id,
            category: self.category.clone(),
            number_of_people: self.number_of_people,
            score: self.score,
            vetted: self.vetted,
            image: self.image_id.as_deref().map(drive::image_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_in_family(family_id: Option<Uuid>) -> Member {
        Member {
            id: Uuid::new_v4(),
            first_name: Some("Jia".to_string()),
            last_name: Some("Tan".to_string()),
            dob: None,
            email: None,
            telegram_username: Some("jia_tan".to_string()),
            telegram_id: None,
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

    fn saved_submission(family_id: Option<Uuid>) -> PhotoSubmission {
        PhotoSubmission {
            id: Uuid::new_v4(),
            date_uploaded: Utc::now(),
            member_id: Some(Uuid::new_v4()),
            family_id,
            category: "fun".to_string(),
            number_of_people: 3,
            score: 10.0,
            vetted: false,
            image_id: None,
        }
    }

    #[test]
    fn sync_family_snapshots_the_members_family() {
        let family = Uuid::new_v4();
        let member = member_in_family(Some(family));
        let mut submission = saved_submission(None);

        submission.sync_family(&member);
        assert_eq!(submission.family_id, Some(family));
    }

    #[test]
    fn sync_family_clears_when_member_has_none() {
        let member = member_in_family(None);
        let mut submission = saved_submission(Some(Uuid::new_v4()));

        submission.sync_family(&member);
        assert_eq!(submission.family_id, None);
    }

    #[test]
    fn reassigning_the_member_does_not_touch_saved_submissions() {
        let old_family = Uuid::new_v4();
        let new_family = Uuid::new_v4();

        let mut member = member_in_family(Some(old_family));
        let mut submission = saved_submission(None);
        submission.sync_family(&member);
        assert_eq!(submission.family_id, Some(old_family));

        // The member moves; the stored snapshot must stay put until the
        // submission itself goes through a save again.
        member.family_id = Some(new_family);
        assert_eq!(submission.family_id, Some(old_family));

        submission.sync_family(&member);
        assert_eq!(submission.family_id, Some(new_family));
    }
}
