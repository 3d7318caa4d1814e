use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub skill_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64, // owner of the skill at review time
    pub rating: i32,
    pub comment: String,
    pub is_public: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub skill_id: i64,
    pub reviewer_id: i64,
    pub reviewee_id: i64,
    pub rating: i32,
    pub comment: String,
    pub is_public: bool,
}

/// Mean rating and the number of reviews it was taken over.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    pub average: f64,
    pub count: i64,
}

impl RatingSummary {
    pub fn from_ratings(ratings: impl IntoIterator<Item = i32>) -> Self {
        let (sum, count) = ratings
            .into_iter()
            .fold((0i64, 0i64), |(sum, n), r| (sum + i64::from(r), n + 1));
        if count == 0 {
            return Self::default();
        }
        Self {
            average: sum as f64 / count as f64,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RatingSummary;

    #[test]
    fn average_of_nothing_is_zero() {
        let summary = RatingSummary::from_ratings(Vec::new());
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let summary = RatingSummary::from_ratings([5, 4, 4, 2]);
        assert_eq!(summary.average, 3.75);
        assert_eq!(summary.count, 4);
    }
}
