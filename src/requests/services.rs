//! Exchange request lifecycle.
//!
//! Only the skill's owner moves a request through its states; only the
//! requester may withdraw it.

use tracing::{info, warn};
use validator::Validate;

use crate::{
    access::{ensure_owner, is_owner},
    error::{AppError, AppResult, DUPLICATE_PENDING},
    requests::{
        dto::{CreateRequestRequest, UpdateStatusRequest},
        repo::RequestRepo,
        repo_types::{ExchangeRequest, RequestStatus},
    },
    skills::repo::SkillRepo,
    store::Store,
};

fn request_not_found() -> AppError {
    AppError::not_found("Request not found")
}

fn illegal_edge(from: RequestStatus, to: RequestStatus) -> AppError {
    AppError::validation(format!("Cannot change request status from {from} to {to}"))
}

pub async fn create(
    store: &dyn Store,
    requester_id: i64,
    mut input: CreateRequestRequest,
) -> AppResult<ExchangeRequest> {
    input.normalize();
    input.validate()?;

    let skill = store
        .find_skill(input.skill_id)
        .await?
        .filter(|s| s.is_active)
        .ok_or_else(|| AppError::not_found("Skill not found"))?;

    if is_owner(&skill, requester_id) {
        return Err(AppError::validation("Cannot request your own skill"));
    }

    if store
        .find_pending_request(skill.id, requester_id)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(DUPLICATE_PENDING.into()));
    }

    let request = store
        .insert_request(&input.into_new_request(requester_id))
        .await?;
    info!(
        request_id = request.id,
        skill_id = skill.id,
        requester_id,
        "request created"
    );
    Ok(request)
}

pub async fn transition(
    store: &dyn Store,
    id: i64,
    user_id: i64,
    input: UpdateStatusRequest,
) -> AppResult<ExchangeRequest> {
    let request = store.find_request(id).await?.ok_or_else(request_not_found)?;
    let skill = store
        .find_skill(request.skill_id)
        .await?
        .ok_or_else(request_not_found)?;

    if !is_owner(&skill, user_id) {
        warn!(request_id = id, user_id, "status change by non-owner");
        return Err(AppError::forbidden("Unauthorized to update this request"));
    }

    input.validate()?;
    let next: RequestStatus = input
        .status
        .parse()
        .map_err(|_| AppError::validation("Invalid status"))?;

    if !request.status.can_transition_to(next) {
        return Err(illegal_edge(request.status, next));
    }

    let notes = input
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());
    let Some(updated) = store
        .update_request_status(id, request.status, next, notes)
        .await?
    else {
        // Another update won the race; report against the status it left.
        let current = store.find_request(id).await?.ok_or_else(request_not_found)?;
        warn!(request_id = id, expected = %request.status, found = %current.status, "stale status change");
        return Err(illegal_edge(current.status, next));
    };
    info!(
        request_id = id,
        from = %request.status,
        to = %next,
        "request status changed"
    );
    Ok(updated)
}

pub async fn delete(store: &dyn Store, id: i64, user_id: i64) -> AppResult<()> {
    let request = store.find_request(id).await?.ok_or_else(request_not_found)?;
    ensure_owner(&request, user_id, "delete this request")?;

    if !store.delete_request(id).await? {
        return Err(request_not_found());
    }
    info!(request_id = id, user_id, "request deleted");
    Ok(())
}

pub async fn list_sent(store: &dyn Store, user_id: i64) -> AppResult<Vec<ExchangeRequest>> {
    store.list_requests_sent(user_id).await
}

pub async fn list_received(store: &dyn Store, user_id: i64) -> AppResult<Vec<ExchangeRequest>> {
    store.list_requests_received(user_id).await
}
