//! Ownership and role predicates shared by every mutating operation.
//!
//! Two orderings are observable and kept deliberately distinct:
//! admin endpoints check the caller's role before looking at the target,
//! owner-gated endpoints load the target first (404 before 403).

use crate::{
    error::{AppError, AppResult},
    requests::repo_types::ExchangeRequest,
    skills::repo_types::Skill,
    store::Store,
    users::{repo::UserRepo, repo_types::User},
};

/// An entity with a single user in control of it.
pub trait Owned {
    fn owner_id(&self) -> i64;
}

impl Owned for Skill {
    fn owner_id(&self) -> i64 {
        self.owner_id
    }
}

/// A request belongs to whoever raised it.
impl Owned for ExchangeRequest {
    fn owner_id(&self) -> i64 {
        self.requester_id
    }
}

pub fn is_owner(entity: &impl Owned, user_id: i64) -> bool {
    entity.owner_id() == user_id
}

pub fn ensure_owner(entity: &impl Owned, user_id: i64, action: &str) -> AppResult<()> {
    if is_owner(entity, user_id) {
        Ok(())
    } else {
        Err(AppError::forbidden(format!("Unauthorized to {action}")))
    }
}

pub fn is_admin(user: &User) -> bool {
    user.is_admin()
}

/// Loads the caller and insists on the admin role. A caller whose record no
/// longer exists is treated like any other non-admin.
pub async fn require_admin(store: &dyn Store, user_id: i64) -> AppResult<User> {
    match store.find_user(user_id).await? {
        Some(user) if is_admin(&user) && user.is_active => Ok(user),
        _ => Err(AppError::forbidden("Admin access required")),
    }
}
