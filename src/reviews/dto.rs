use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::reviews::repo_types::{NewReview, RatingSummary, Review};

fn default_public() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[serde(alias = "skillId")]
    pub skill_id: i64,
    #[serde(alias = "revieweeId")]
    pub reviewee_id: i64,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: String,
    #[serde(default = "default_public", alias = "isPublic")]
    pub is_public: bool,
}

impl CreateReviewRequest {
    pub fn into_new_review(self, reviewer_id: i64) -> NewReview {
        NewReview {
            skill_id: self.skill_id,
            reviewer_id,
            reviewee_id: self.reviewee_id,
            rating: self.rating,
            comment: self.comment.trim().to_string(),
            is_public: self.is_public,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub message: &'static str,
    pub review: Review,
}

/// Public reviews plus the rating taken over every review.
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub average_rating: f64,
    pub review_count: i64,
}

impl ReviewsResponse {
    pub fn new(reviews: Vec<Review>, rating: RatingSummary) -> Self {
        Self {
            reviews,
            average_rating: rating.average,
            review_count: rating.count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_and_defaults() {
        let req: CreateReviewRequest = serde_json::from_value(serde_json::json!({
            "skillId": 1,
            "revieweeId": 2,
            "rating": 4,
        }))
        .expect("parse");
        assert!(req.is_public);
        assert!(req.comment.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rating_must_be_one_to_five() {
        for rating in [0, 6, -1] {
            let req = CreateReviewRequest {
                skill_id: 1,
                reviewee_id: 2,
                rating,
                comment: String::new(),
                is_public: true,
            };
            assert!(req.validate().is_err(), "rating {rating}");
        }
    }
}
