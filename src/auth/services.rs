//! Registration, login and token refresh.

use tracing::{info, warn};
use validator::Validate;

use crate::{
    auth::{
        dto::{normalize_email, LoginRequest, RegisterRequest},
        jwt::{JwtKeys, TokenPair},
        password::{hash_password, verify_password},
    },
    error::{AppError, AppResult, DUPLICATE_EMAIL},
    store::Store,
    users::{
        repo::UserRepo,
        repo_types::{NewUser, Role, User},
    },
};

pub async fn register(
    store: &dyn Store,
    keys: &JwtKeys,
    mut input: RegisterRequest,
) -> AppResult<(User, TokenPair)> {
    input.normalize();
    input.validate()?;

    if store.find_user_by_email(&input.email).await?.is_some() {
        warn!(email = %input.email, "email already registered");
        return Err(AppError::Conflict(DUPLICATE_EMAIL.into()));
    }

    let password_hash = hash_password(&input.password)?;
    let user = store
        .insert_user(&NewUser {
            name: input.name,
            email: input.email,
            password_hash,
            bio: input.bio,
            role: Role::User,
        })
        .await?;

    let tokens = keys.issue_pair(user.id)?;
    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((user, tokens))
}

pub async fn login(
    store: &dyn Store,
    keys: &JwtKeys,
    input: LoginRequest,
) -> AppResult<(User, TokenPair)> {
    let email = normalize_email(&input.email);
    if email.is_empty() || input.password.is_empty() {
        return Err(AppError::validation("Email and password required"));
    }

    let Some(user) = store.find_user_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(AppError::InvalidCredentials);
    };

    // Deactivation wins over credential correctness.
    if !user.is_active {
        warn!(user_id = user.id, "login on deactivated account");
        return Err(AppError::AccountDeactivated);
    }

    if !verify_password(&input.password, &user.password_hash)? {
        warn!(user_id = user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    store.record_login(user.id).await?;
    let user = store.find_user(user.id).await?.unwrap_or(user);

    let tokens = keys.issue_pair(user.id)?;
    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok((user, tokens))
}

pub async fn refresh(
    store: &dyn Store,
    keys: &JwtKeys,
    refresh_token: &str,
) -> AppResult<(User, TokenPair)> {
    let claims = keys.verify_refresh(refresh_token)?;

    let user = store
        .find_user(claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;
    if !user.is_active {
        return Err(AppError::AccountDeactivated);
    }

    let tokens = keys.issue_pair(user.id)?;
    info!(user_id = user.id, "tokens refreshed");
    Ok((user, tokens))
}
