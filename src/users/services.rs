use tracing::info;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    reviews::{repo::ReviewRepo, repo_types::RatingSummary},
    store::Store,
    users::{dto::UpdateProfileRequest, repo::UserRepo, repo_types::User},
};

pub async fn profile(store: &dyn Store, user_id: i64) -> AppResult<(User, RatingSummary)> {
    let user = store
        .find_user(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    let rating = store.user_rating(user.id).await?;
    Ok((user, rating))
}

pub async fn update_profile(
    store: &dyn Store,
    user_id: i64,
    mut input: UpdateProfileRequest,
) -> AppResult<User> {
    input.normalize();
    input.validate()?;

    let user = store
        .update_user(user_id, &input.into_patch())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    info!(user_id = user.id, "profile updated");
    Ok(user)
}
