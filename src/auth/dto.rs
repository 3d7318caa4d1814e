use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{auth::jwt::TokenPair, users::repo_types::User};

lazy_static! {
    pub(crate) static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub const MIN_NAME_LEN: u64 = 2;
pub const MIN_PASSWORD_LEN: u64 = 6;

/// Request body for user registration.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = MIN_NAME_LEN, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,
    #[validate(regex(path = *EMAIL_RE, message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = MIN_PASSWORD_LEN, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: String,
}

impl RegisterRequest {
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = normalize_email(&self.email);
        self.bio = self.bio.trim().to_string();
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    #[serde(alias = "refreshToken")]
    pub refresh_token: String,
}

/// Response returned after register, login or refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub user: User,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
