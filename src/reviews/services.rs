use tracing::info;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    reviews::{
        dto::{CreateReviewRequest, ReviewsResponse},
        repo::ReviewRepo,
        repo_types::Review,
    },
    skills::repo::SkillRepo,
    store::Store,
    users::repo::UserRepo,
};

pub async fn create(
    store: &dyn Store,
    reviewer_id: i64,
    input: CreateReviewRequest,
) -> AppResult<Review> {
    input.validate()?;

    let skill = store
        .find_skill(input.skill_id)
        .await?
        .ok_or_else(|| AppError::not_found("Skill not found"))?;
    if skill.owner_id != input.reviewee_id {
        return Err(AppError::validation("Reviewee must be the skill owner"));
    }
    if reviewer_id == input.reviewee_id {
        return Err(AppError::validation("Cannot review yourself"));
    }

    let review = store.insert_review(&input.into_new_review(reviewer_id)).await?;
    info!(
        review_id = review.id,
        skill_id = review.skill_id,
        reviewer_id,
        rating = review.rating,
        "review created"
    );
    Ok(review)
}

pub async fn list_for_user(store: &dyn Store, user_id: i64) -> AppResult<ReviewsResponse> {
    if store.find_user(user_id).await?.is_none() {
        return Err(AppError::not_found("User not found"));
    }
    let reviews = store.list_public_reviews_for_user(user_id).await?;
    let rating = store.user_rating(user_id).await?;
    Ok(ReviewsResponse::new(reviews, rating))
}

pub async fn list_for_skill(store: &dyn Store, skill_id: i64) -> AppResult<ReviewsResponse> {
    if store.find_skill(skill_id).await?.is_none() {
        return Err(AppError::not_found("Skill not found"));
    }
    let reviews = store.list_public_reviews_for_skill(skill_id).await?;
    let rating = store.skill_rating(skill_id).await?;
    Ok(ReviewsResponse::new(reviews, rating))
}
