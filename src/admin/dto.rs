use serde::{Deserialize, Serialize};

use crate::users::repo_types::{AdminUserPatch, Role, User};

/// Body of `PATCH /admin/users/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct AdminUpdateUserRequest {
    pub role: Option<Role>,
    #[serde(alias = "isActive")]
    pub is_active: Option<bool>,
}

impl AdminUpdateUserRequest {
    pub fn into_patch(self) -> AdminUserPatch {
        AdminUserPatch {
            role: self.role,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub message: &'static str,
    pub user: User,
}
