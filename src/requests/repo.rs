use async_trait::async_trait;

use crate::{
    db::PgStore,
    error::AppResult,
    requests::repo_types::{ExchangeRequest, NewRequest, RequestStatus},
};

#[async_trait]
pub trait RequestRepo: Send + Sync {
    /// Fails with a conflict if a pending request for the same
    /// (skill, requester) pair already exists.
    async fn insert_request(&self, new: &NewRequest) -> AppResult<ExchangeRequest>;
    async fn find_request(&self, id: i64) -> AppResult<Option<ExchangeRequest>>;
    async fn find_pending_request(
        &self,
        skill_id: i64,
        requester_id: i64,
    ) -> AppResult<Option<ExchangeRequest>>;
    /// Stamps `updated_at`; stamps `completed_at` only when entering `completed`.
    /// Moves the request from `from` to `to`. Returns `None` when the request
    /// is gone or its status is no longer `from`.
    async fn update_request_status(
        &self,
        id: i64,
        from: RequestStatus,
        to: RequestStatus,
        notes: Option<&str>,
    ) -> AppResult<Option<ExchangeRequest>>;
    async fn delete_request(&self, id: i64) -> AppResult<bool>;
    async fn list_requests_received(&self, owner_id: i64) -> AppResult<Vec<ExchangeRequest>>;
    async fn list_requests_sent(&self, requester_id: i64) -> AppResult<Vec<ExchangeRequest>>;
    async fn list_all_requests(&self) -> AppResult<Vec<ExchangeRequest>>;
}

#[async_trait]
impl RequestRepo for PgStore {
    async fn insert_request(&self, new: &NewRequest) -> AppResult<ExchangeRequest> {
        let request = sqlx::query_as::<_, ExchangeRequest>(
            r#"
            INSERT INTO requests (skill_id, requester_id, message, priority, preferred_schedule)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(new.skill_id)
        .bind(new.requester_id)
        .bind(&new.message)
        .bind(new.priority)
        .bind(new.preferred_schedule.as_deref())
        .fetch_one(&self.pool)
        .await?;
        Ok(request)
    }

    async fn find_request(&self, id: i64) -> AppResult<Option<ExchangeRequest>> {
        let request =
            sqlx::query_as::<_, ExchangeRequest>(r#"SELECT * FROM requests WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(request)
    }

    async fn find_pending_request(
        &self,
        skill_id: i64,
        requester_id: i64,
    ) -> AppResult<Option<ExchangeRequest>> {
        let request = sqlx::query_as::<_, ExchangeRequest>(
            r#"
            SELECT * FROM requests
            WHERE skill_id = $1 AND requester_id = $2 AND status = 'pending'
            "#,
        )
        .bind(skill_id)
        .bind(requester_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(request)
    }

    async fn update_request_status(
        &self,
        id: i64,
        from: RequestStatus,
        to: RequestStatus,
        notes: Option<&str>,
    ) -> AppResult<Option<ExchangeRequest>> {
        let request = sqlx::query_as::<_, ExchangeRequest>(
            r#"
            UPDATE requests
            SET status = $2,
                notes = COALESCE($3, notes),
                updated_at = NOW(),
                completed_at = CASE WHEN $2 = 'completed'::request_status
                                    THEN NOW() ELSE completed_at END
            WHERE id = $1 AND status = $4
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(to)
        .bind(notes)
        .bind(from)
        .fetch_optional(&self.pool)
        .await?;
        Ok(request)
    }

    async fn delete_request(&self, id: i64) -> AppResult<bool> {
        let res = sqlx::query(r#"DELETE FROM requests WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn list_requests_received(&self, owner_id: i64) -> AppResult<Vec<ExchangeRequest>> {
        let requests = sqlx::query_as::<_, ExchangeRequest>(
            r#"
            SELECT r.* FROM requests r
            JOIN skills s ON s.id = r.skill_id
            WHERE s.owner_id = $1
            ORDER BY r.created_at DESC, r.id DESC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    async fn list_requests_sent(&self, requester_id: i64) -> AppResult<Vec<ExchangeRequest>> {
        let requests = sqlx::query_as::<_, ExchangeRequest>(
            r#"
            SELECT * FROM requests
            WHERE requester_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(requester_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }

    async fn list_all_requests(&self) -> AppResult<Vec<ExchangeRequest>> {
        let requests = sqlx::query_as::<_, ExchangeRequest>(
            r#"SELECT * FROM requests ORDER BY created_at DESC, id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(requests)
    }
}
