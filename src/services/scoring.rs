// src/services/scoring.rs
// DOCUMENTATION: Photo submission scoring engine
// PURPOSE: Deterministic score assignment and family point aggregation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BackendError;

/// Closed set of photo submission categories
/// DOCUMENTATION: The tag strings are the wire format used by the bot and
/// stored in the category column. Anything outside this set is rejected at
/// the input boundary before a score is ever computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionCategory {
    /// Organization-wide event
    Ssa,
    /// On-campus random encounter
    Random,
    /// On-campus fun event
    Fun,
    /// Off-campus single family event
    Single,
    /// Off-campus crossover family event
    Crossover,
}

impl SubmissionCategory {
    pub const ALL: [SubmissionCategory; 5] = [
        SubmissionCategory::Ssa,
        SubmissionCategory::Random,
        SubmissionCategory::Fun,
        SubmissionCategory::Single,
        SubmissionCategory::Crossover,
    ];

    /// Tag string as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionCategory::Ssa => "ssa",
            SubmissionCategory::Random => "random",
            SubmissionCategory::Fun => "fun",
            SubmissionCategory::Single => "single",
            SubmissionCategory::Crossover => "crossover",
        }
    }
}

impl fmt::Display for SubmissionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionCategory {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ssa" => Ok(SubmissionCategory::Ssa),
            "random" => Ok(SubmissionCategory::Random),
            "fun" => Ok(SubmissionCategory::Fun),
            "single" => Ok(SubmissionCategory::Single),
            "crossover" => Ok(SubmissionCategory::Crossover),
            other => Err(BackendError::InvalidCategory(other.to_string())),
        }
    }
}

/// Compute the score of a photo submission from its category and the number
/// of people in the photo (submitter included).
///
/// The `(n - 1)` formulas go negative for n = 0; that is the established
/// behavior and is pinned by tests rather than clamped away.
pub fn compute_score(category: SubmissionCategory, number_of_people: i32) -> f64 {
    let n = f64::from(number_of_people);
    match category {
        SubmissionCategory::Ssa => n * 10.0,
        SubmissionCategory::Random => (n - 1.0) * 2.0,
        SubmissionCategory::Fun => (n - 1.0) * 5.0,
        SubmissionCategory::Single => (n - 1.0) * 5.0 + 10.0,
        SubmissionCategory::Crossover => (n - 1.0) * 5.0 + 30.0,
    }
}

/// Resolve the score to persist for a new submission.
///
/// An explicit score wins, zero included - zero is a valid override, not a
/// missing value. Only a genuinely absent score is computed.
pub fn score_or_computed(
    explicit: Option<f64>,
    category: SubmissionCategory,
    number_of_people: i32,
) -> f64 {
    match explicit {
        Some(score) => score,
        None => compute_score(category, number_of_people),
    }
}

/// Total points of a family: the sum of its submissions' scores plus the
/// manual adjustment. An empty submission set yields the adjustment alone.
///
/// This is recomputed on every read. It must never be turned into a stored
/// running counter - concurrent submission writes are only safe because
/// nothing incremental exists to race on.
pub fn aggregate_points(scores: &[f64], adjustment: f64) -> f64 {
    scores.iter().sum::<f64>() + adjustment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_deterministic() {
        for category in SubmissionCategory::ALL {
            for n in 0..8 {
                assert_eq!(compute_score(category, n), compute_score(category, n));
            }
        }
    }

    #[test]
    fn score_table() {
        assert_eq!(compute_score(SubmissionCategory::Ssa, 3), 30.0);
        assert_eq!(compute_score(SubmissionCategory::Random, 3), 4.0);
        assert_eq!(compute_score(SubmissionCategory::Fun, 4), 15.0);
        assert_eq!(compute_score(SubmissionCategory::Single, 2), 15.0);
        assert_eq!(compute_score(SubmissionCategory::Crossover, 5), 50.0);
    }

    #[test]
    fn explicit_score_wins() {
        let score = score_or_computed(Some(12.5), SubmissionCategory::Ssa, 3);
        assert_eq!(score, 12.5);
    }

    #[test]
    fn explicit_zero_is_not_unset() {
        // Zero is a deliberate override and must not trigger a recalculation.
        let score = score_or_computed(Some(0.0), SubmissionCategory::Crossover, 5);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn absent_score_is_computed() {
        let score = score_or_computed(None, SubmissionCategory::Fun, 4);
        assert_eq!(score, 15.0);
    }

    #[test]
    fn negative_contribution_for_zero_people() {
        // The (n - 1) formulas are not clamped at n = 0. Pinned on purpose:
        // any change here is a scoring-rule change, not a bug fix.
        assert_eq!(compute_score(SubmissionCategory::Ssa, 0), 0.0);
        assert_eq!(compute_score(SubmissionCategory::Random, 0), -2.0);
        assert_eq!(compute_score(SubmissionCategory::Fun, 0), -5.0);
        assert_eq!(compute_score(SubmissionCategory::Single, 0), 5.0);
        assert_eq!(compute_score(SubmissionCategory::Crossover, 0), 25.0);
    }

    #[test]
    fn empty_aggregate_is_the_adjustment() {
        assert_eq!(aggregate_points(&[], 2.5), 2.5);
        assert_eq!(aggregate_points(&[], -4.0), -4.0);
        assert_eq!(aggregate_points(&[], 0.0), 0.0);
    }

    #[test]
    fn aggregate_is_order_independent() {
        let scores = [30.0, 4.0, 15.0, 50.0, -2.0];
        let permuted = [50.0, -2.0, 30.0, 15.0, 4.0];
        assert_eq!(aggregate_points(&scores, 1.5), aggregate_points(&permuted, 1.5));
        assert_eq!(aggregate_points(&scores, 1.5), 98.5);
    }

    #[test]
    fn aggregate_applies_negative_adjustment() {
        assert_eq!(aggregate_points(&[10.0, 20.0], -15.0), 15.0);
    }

    #[test]
    fn category_tags_round_trip() {
        for category in SubmissionCategory::ALL {
            assert_eq!(category.as_str().parse::<SubmissionCategory>().ok(), Some(category));
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "selfie".parse::<SubmissionCategory>().unwrap_err();
        assert!(matches!(err, BackendError::InvalidCategory(tag) if tag == "selfie"));

        // Tags are exact: no case folding, no trimming.
        assert!("SSA".parse::<SubmissionCategory>().is_err());
        assert!(" fun".parse::<SubmissionCategory>().is_err());
        assert!("".parse::<SubmissionCategory>().is_err());
    }
}
