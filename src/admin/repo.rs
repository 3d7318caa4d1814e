use async_trait::async_trait;
use serde::Serialize;
use sqlx::FromRow;

use crate::{db::PgStore, error::AppResult};

/// Marketplace-wide counters for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct PlatformStats {
    pub users: i64,
    pub active_users: i64,
    pub skills: i64,
    pub active_skills: i64,
    pub requests: i64,
    pub pending_requests: i64,
    pub accepted_requests: i64,
    pub rejected_requests: i64,
    pub completed_requests: i64,
    pub reviews: i64,
}

#[async_trait]
pub trait StatsRepo: Send + Sync {
    async fn platform_stats(&self) -> AppResult<PlatformStats>;
}

#[async_trait]
impl StatsRepo for PgStore {
    async fn platform_stats(&self) -> AppResult<PlatformStats> {
        let stats = sqlx::query_as::<_, PlatformStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS users,
                (SELECT COUNT(*) FROM users WHERE is_active) AS active_users,
                (SELECT COUNT(*) FROM skills) AS skills,
                (SELECT COUNT(*) FROM skills WHERE is_active) AS active_skills,
                (SELECT COUNT(*) FROM requests) AS requests,
                (SELECT COUNT(*) FROM requests WHERE status = 'pending') AS pending_requests,
                (SELECT COUNT(*) FROM requests WHERE status = 'accepted') AS accepted_requests,
                (SELECT COUNT(*) FROM requests WHERE status = 'rejected') AS rejected_requests,
                (SELECT COUNT(*) FROM requests WHERE status = 'completed') AS completed_requests,
                (SELECT COUNT(*) FROM reviews) AS reviews
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(stats)
    }
}
