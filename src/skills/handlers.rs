use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{
    auth::extractors::{AuthUser, OptionalAuth},
    dto::{MessageResponse, Page},
    error::AppResult,
    extract::{JsonBody, PathId, QueryParams},
    skills::{
        dto::{CreateSkillRequest, ListSkillsQuery, SkillResponse, UpdateSkillRequest},
        repo_types::Skill,
        services,
    },
    state::AppState,
};

pub fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/skills", get(list_skills).post(create_skill))
        .route("/skills/my-skills", get(my_skills))
        .route(
            "/skills/:id",
            get(get_skill).put(update_skill).delete(delete_skill),
        )
}

#[instrument(skip(state, viewer))]
pub async fn list_skills(
    State(state): State<AppState>,
    viewer: OptionalAuth,
    QueryParams(query): QueryParams<ListSkillsQuery>,
) -> AppResult<Json<Page<Skill>>> {
    if let OptionalAuth(Some(user_id)) = viewer {
        debug!(user_id, "catalog viewed by signed-in user");
    }
    Ok(Json(services::list(state.store(), &query).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(payload): JsonBody<CreateSkillRequest>,
) -> AppResult<(StatusCode, Json<SkillResponse>)> {
    let skill = services::create(state.store(), user_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SkillResponse {
            message: "Skill created successfully",
            skill,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn my_skills(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<Skill>>> {
    Ok(Json(services::list_mine(state.store(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn get_skill(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> AppResult<Json<Skill>> {
    Ok(Json(services::get(state.store(), id).await?))
}

#[instrument(skip(state, payload))]
pub async fn update_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
    JsonBody(payload): JsonBody<UpdateSkillRequest>,
) -> AppResult<Json<SkillResponse>> {
    let skill = services::update(state.store(), id, user_id, payload).await?;
    Ok(Json(SkillResponse {
        message: "Skill updated successfully",
        skill,
    }))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
) -> AppResult<Json<MessageResponse>> {
    services::delete(state.store(), id, user_id).await?;
    Ok(Json(MessageResponse::new("Skill deleted successfully")))
}
