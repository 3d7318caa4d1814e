use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;

use crate::{
    admin::{
        dto::{AdminUpdateUserRequest, UserResponse},
        repo::PlatformStats,
        services,
    },
    auth::extractors::AuthUser,
    dto::MessageResponse,
    error::AppResult,
    extract::{JsonBody, PathId},
    requests::repo_types::ExchangeRequest,
    skills::repo_types::Skill,
    state::AppState,
    users::repo_types::User,
};

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(list_users))
        .route("/admin/users/:id", delete(delete_user).patch(update_user))
        .route("/admin/skills", get(list_skills))
        .route("/admin/skills/:id", delete(delete_skill))
        .route("/admin/requests", get(list_requests))
        .route("/admin/requests/:id", delete(delete_request))
        .route("/admin/stats", get(stats))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(services::list_users(state.store(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn list_skills(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<Skill>>> {
    Ok(Json(services::list_skills(state.store(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn list_requests(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<ExchangeRequest>>> {
    Ok(Json(services::list_requests(state.store(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn stats(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<PlatformStats>> {
    Ok(Json(services::stats(state.store(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
    JsonBody(payload): JsonBody<AdminUpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = services::update_user(state.store(), user_id, id, payload).await?;
    Ok(Json(UserResponse {
        message: "User updated successfully",
        user,
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
) -> AppResult<Json<MessageResponse>> {
    services::delete_user(state.store(), user_id, id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
) -> AppResult<Json<MessageResponse>> {
    services::delete_skill(state.store(), user_id, id).await?;
    Ok(Json(MessageResponse::new("Skill deleted successfully")))
}

#[instrument(skip(state))]
pub async fn delete_request(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
) -> AppResult<Json<MessageResponse>> {
    services::delete_request(state.store(), user_id, id).await?;
    Ok(Json(MessageResponse::new("Request deleted successfully")))
}
