use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    auth::dto::MIN_NAME_LEN,
    users::repo_types::{User, UserPatch},
};

/// Body of `PUT /profile`. Absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = MIN_NAME_LEN, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,
}

impl UpdateProfileRequest {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            name: self.name,
            bio: self.bio,
        }
    }

    pub fn normalize(&mut self) {
        if let Some(name) = self.name.as_mut() {
            *name = name.trim().to_string();
        }
        if let Some(bio) = self.bio.as_mut() {
            *bio = bio.trim().to_string();
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: User,
    pub average_rating: f64,
    pub review_count: i64,
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdatedResponse {
    pub message: &'static str,
    pub user: User,
}
