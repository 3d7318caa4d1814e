use async_trait::async_trait;

use crate::{
    db::PgStore,
    error::AppResult,
    reviews::repo_types::{NewReview, RatingSummary, Review},
};

#[async_trait]
pub trait ReviewRepo: Send + Sync {
    async fn insert_review(&self, new: &NewReview) -> AppResult<Review>;
    async fn list_public_reviews_for_user(&self, user_id: i64) -> AppResult<Vec<Review>>;
    async fn list_public_reviews_for_skill(&self, skill_id: i64) -> AppResult<Vec<Review>>;
    /// Summarises every review of the user, public or not.
    async fn user_rating(&self, user_id: i64) -> AppResult<RatingSummary>;
    async fn skill_rating(&self, skill_id: i64) -> AppResult<RatingSummary>;
}

#[async_trait]
impl ReviewRepo for PgStore {
    async fn insert_review(&self, new: &NewReview) -> AppResult<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (skill_id, reviewer_id, reviewee_id, rating, comment, is_public)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.skill_id)
        .bind(new.reviewer_id)
        .bind(new.reviewee_id)
        .bind(new.rating)
        .bind(&new.comment)
        .bind(new.is_public)
        .fetch_one(&self.pool)
        .await?;
        Ok(review)
    }

    async fn list_public_reviews_for_user(&self, user_id: i64) -> AppResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE reviewee_id = $1 AND is_public
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    async fn list_public_reviews_for_skill(&self, skill_id: i64) -> AppResult<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT * FROM reviews
            WHERE skill_id = $1 AND is_public
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(skill_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reviews)
    }

    async fn user_rating(&self, user_id: i64) -> AppResult<RatingSummary> {
        let (average, count): (f64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(AVG(rating), 0)::float8, COUNT(*)
            FROM reviews WHERE reviewee_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(RatingSummary { average, count })
    }

    async fn skill_rating(&self, skill_id: i64) -> AppResult<RatingSummary> {
        let (average, count): (f64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(AVG(rating), 0)::float8, COUNT(*)
            FROM reviews WHERE skill_id = $1
            "#,
        )
        .bind(skill_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(RatingSummary { average, count })
    }
}
