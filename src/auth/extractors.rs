use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use crate::{auth::jwt::JwtKeys, error::AppError, store::Store, users::repo::UserRepo};

/// Validates the bearer access token and yields the id of a user that still
/// exists and is active.
pub struct AuthUser(pub i64);

/// Like [`AuthUser`] but never rejects; a missing or bad token yields `None`.
pub struct OptionalAuth(pub Option<i64>);

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

    auth.strip_prefix("Bearer ")
        .or_else(|| auth.strip_prefix("bearer "))
        .map(str::trim)
        .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".into()))
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
    Arc<dyn Store>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify_access(token).map_err(|e| {
            warn!(error = %e, "rejected bearer token");
            e
        })?;

        let store = <Arc<dyn Store> as FromRef<S>>::from_ref(state);
        let Some(user) = store.find_user(claims.sub).await? else {
            warn!(user_id = claims.sub, "token for deleted user");
            return Err(AppError::Unauthorized("User not found".into()));
        };
        if !user.is_active {
            warn!(user_id = user.id, "token for deactivated user");
            return Err(AppError::AccountDeactivated);
        }
        Ok(AuthUser(user.id))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(token) = bearer_token(parts) else {
            return Ok(OptionalAuth(None));
        };
        let keys = JwtKeys::from_ref(state);
        Ok(OptionalAuth(keys.verify_access(token).ok().map(|c| c.sub)))
    }
}
