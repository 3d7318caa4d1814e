//! Argon2id credential hashing in PHC string form.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::error::{AppError, AppResult};

fn hasher() -> Argon2<'static> {
    Argon2::default()
}

fn internal(what: &'static str, err: password_hash::Error) -> AppError {
    error!(error = %err, "{what}");
    AppError::Internal(anyhow::anyhow!("{what}: {err}"))
}

pub fn hash_password(plain: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| internal("password hashing failed", e))
}

/// `Ok(false)` on a mismatch; an unreadable stored hash is an internal error.
pub fn verify_password(plain: &str, stored: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(stored).map_err(|e| internal("stored password hash unreadable", e))?;
    match hasher().verify_password(plain.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(internal("password verification failed", e)),
    }
}
