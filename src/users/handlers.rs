use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::AppResult,
    extract::JsonBody,
    state::AppState,
    users::{
        dto::{ProfileResponse, ProfileUpdatedResponse, UpdateProfileRequest},
        services,
    },
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let (user, rating) = services::profile(state.store(), user_id).await?;
    Ok(Json(ProfileResponse {
        user,
        average_rating: rating.average,
        review_count: rating.count,
    }))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(payload): JsonBody<UpdateProfileRequest>,
) -> AppResult<Json<ProfileUpdatedResponse>> {
    let user = services::update_profile(state.store(), user_id, payload).await?;
    Ok(Json(ProfileUpdatedResponse {
        message: "Profile updated successfully",
        user,
    }))
}
