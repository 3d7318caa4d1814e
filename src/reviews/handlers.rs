use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::AppResult,
    extract::{JsonBody, PathId},
    reviews::{
        dto::{CreateReviewRequest, ReviewResponse, ReviewsResponse},
        services,
    },
    state::AppState,
};

pub fn review_routes() -> Router<AppState> {
    Router::new()
        .route("/reviews", post(create_review))
        .route("/users/:id/reviews", get(user_reviews))
        .route("/skills/:id/reviews", get(skill_reviews))
}

#[instrument(skip(state, payload))]
pub async fn create_review(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(payload): JsonBody<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    let review = services::create(state.store(), user_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ReviewResponse {
            message: "Review submitted successfully",
            review,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn user_reviews(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> AppResult<Json<ReviewsResponse>> {
    Ok(Json(services::list_for_user(state.store(), id).await?))
}

#[instrument(skip(state))]
pub async fn skill_reviews(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> AppResult<Json<ReviewsResponse>> {
    Ok(Json(services::list_for_skill(state.store(), id).await?))
}
