use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    dto::MessageResponse,
    error::AppResult,
    extract::{JsonBody, PathId},
    requests::{
        dto::{CreateRequestRequest, RequestResponse, UpdateStatusRequest},
        repo_types::ExchangeRequest,
        services,
    },
    state::AppState,
};

pub fn request_routes() -> Router<AppState> {
    Router::new()
        .route("/requests", post(create_request))
        .route("/requests/sent", get(sent_requests))
        .route("/requests/received", get(received_requests))
        .route("/requests/:id", put(update_request).delete(delete_request))
}

#[instrument(skip(state, payload))]
pub async fn create_request(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(payload): JsonBody<CreateRequestRequest>,
) -> AppResult<(StatusCode, Json<RequestResponse>)> {
    let request = services::create(state.store(), user_id, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(RequestResponse {
            message: "Request sent successfully",
            request,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn sent_requests(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<ExchangeRequest>>> {
    Ok(Json(services::list_sent(state.store(), user_id).await?))
}

#[instrument(skip(state))]
pub async fn received_requests(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<ExchangeRequest>>> {
    Ok(Json(services::list_received(state.store(), user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn update_request(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
    JsonBody(payload): JsonBody<UpdateStatusRequest>,
) -> AppResult<Json<RequestResponse>> {
    let request = services::transition(state.store(), id, user_id, payload).await?;
    Ok(Json(RequestResponse {
        message: "Request updated successfully",
        request,
    }))
}

#[instrument(skip(state))]
pub async fn delete_request(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    PathId(id): PathId<i64>,
) -> AppResult<Json<MessageResponse>> {
    services::delete(state.store(), id, user_id).await?;
    Ok(Json(MessageResponse::new("Request deleted successfully")))
}
