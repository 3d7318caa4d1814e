//! Moderation and account management. Every operation checks the caller's
//! role before it looks at the target.

use tracing::info;

use crate::{
    access::require_admin,
    admin::{
        dto::AdminUpdateUserRequest,
        repo::{PlatformStats, StatsRepo},
    },
    error::{AppError, AppResult},
    requests::{repo::RequestRepo, repo_types::ExchangeRequest},
    skills::{repo::SkillRepo, repo_types::Skill},
    store::Store,
    users::{
        repo::UserRepo,
        repo_types::{Role, User},
    },
};

pub async fn list_users(store: &dyn Store, caller: i64) -> AppResult<Vec<User>> {
    require_admin(store, caller).await?;
    store.list_users().await
}

pub async fn list_skills(store: &dyn Store, caller: i64) -> AppResult<Vec<Skill>> {
    require_admin(store, caller).await?;
    store.list_all_skills().await
}

pub async fn list_requests(store: &dyn Store, caller: i64) -> AppResult<Vec<ExchangeRequest>> {
    require_admin(store, caller).await?;
    store.list_all_requests().await
}

pub async fn stats(store: &dyn Store, caller: i64) -> AppResult<PlatformStats> {
    require_admin(store, caller).await?;
    store.platform_stats().await
}

pub async fn update_user(
    store: &dyn Store,
    caller: i64,
    target: i64,
    input: AdminUpdateUserRequest,
) -> AppResult<User> {
    let admin = require_admin(store, caller).await?;

    if target == admin.id {
        if input.is_active == Some(false) {
            return Err(AppError::validation("Cannot deactivate your own account"));
        }
        if input.role == Some(Role::User) {
            return Err(AppError::validation("Cannot remove your own admin role"));
        }
    }

    let user = store
        .admin_update_user(target, &input.into_patch())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;
    info!(
        admin_id = admin.id,
        user_id = user.id,
        role = user.role.as_str(),
        is_active = user.is_active,
        "user updated by admin"
    );
    Ok(user)
}

pub async fn delete_user(store: &dyn Store, caller: i64, target: i64) -> AppResult<()> {
    let admin = require_admin(store, caller).await?;
    if target == admin.id {
        return Err(AppError::validation("Cannot delete your own account"));
    }
    if !store.delete_user(target).await? {
        return Err(AppError::not_found("User not found"));
    }
    info!(admin_id = admin.id, user_id = target, "user deleted by admin");
    Ok(())
}

pub async fn delete_skill(store: &dyn Store, caller: i64, target: i64) -> AppResult<()> {
    let admin = require_admin(store, caller).await?;
    if !store.delete_skill(target).await? {
        return Err(AppError::not_found("Skill not found"));
    }
    info!(admin_id = admin.id, skill_id = target, "skill deleted by admin");
    Ok(())
}

pub async fn delete_request(store: &dyn Store, caller: i64, target: i64) -> AppResult<()> {
    let admin = require_admin(store, caller).await?;
    if !store.delete_request(target).await? {
        return Err(AppError::not_found("Request not found"));
    }
    info!(admin_id = admin.id, request_id = target, "request deleted by admin");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryStore, Seeder};

    #[tokio::test]
    async fn role_is_checked_before_target() {
        let store = MemoryStore::new();
        let user = Seeder::new(&store).user("user@x.com").await;

        assert!(matches!(
            delete_user(&store, user.id, 9_999).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            delete_skill(&store, user.id, 9_999).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            update_user(&store, user.id, 9_999, AdminUpdateUserRequest::default()).await,
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(stats(&store, user.id).await, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn missing_target_is_not_found_for_admins() {
        let store = MemoryStore::new();
        let admin = Seeder::new(&store).admin("root@x.com").await;

        assert!(matches!(
            delete_user(&store, admin.id, 9_999).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            delete_request(&store, admin.id, 9_999).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn admin_cannot_remove_themselves() {
        let store = MemoryStore::new();
        let admin = Seeder::new(&store).admin("root@x.com").await;

        let err = delete_user(&store, admin.id, admin.id).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        for input in [
            AdminUpdateUserRequest {
                role: Some(Role::User),
                is_active: None,
            },
            AdminUpdateUserRequest {
                role: None,
                is_active: Some(false),
            },
        ] {
            let err = update_user(&store, admin.id, admin.id, input).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn promote_and_deactivate_other_users() {
        let store = MemoryStore::new();
        let seed = Seeder::new(&store);
        let admin = seed.admin("root@x.com").await;
        let user = seed.user("user@x.com").await;

        let promoted = update_user(
            &store,
            admin.id,
            user.id,
            AdminUpdateUserRequest {
                role: Some(Role::Admin),
                is_active: None,
            },
        )
        .await
        .expect("promote");
        assert!(promoted.is_admin());
        assert!(promoted.is_active);

        let deactivated = update_user(
            &store,
            admin.id,
            user.id,
            AdminUpdateUserRequest {
                role: None,
                is_active: Some(false),
            },
        )
        .await
        .expect("deactivate");
        assert!(!deactivated.is_active);
        assert!(matches!(
            list_users(&store, user.id).await,
            Err(AppError::Forbidden(_))
        ));
    }

    #[tokio::test]
    async fn stats_count_everything() {
        let store = MemoryStore::new();
        let seed = Seeder::new(&store);
        let admin = seed.admin("root@x.com").await;
        let owner = seed.user("owner@x.com").await;
        let learner = seed.user("learner@x.com").await;
        let skill = seed.skill(owner.id, "Origami").await;
        seed.request(skill.id, learner.id).await;
        store.set_active(learner.id, false);

        let stats = stats(&store, admin.id).await.expect("stats");
        assert_eq!(
            stats,
            PlatformStats {
                users: 3,
                active_users: 2,
                skills: 1,
                active_skills: 1,
                requests: 1,
                pending_requests: 1,
                ..Default::default()
            }
        );
        assert_eq!(list_skills(&store, admin.id).await.expect("skills").len(), 1);
        assert_eq!(list_requests(&store, admin.id).await.expect("requests").len(), 1);
    }
}
