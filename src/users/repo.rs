use async_trait::async_trait;

use crate::{
    db::PgStore,
    error::AppResult,
    users::repo_types::{AdminUserPatch, NewUser, User, UserPatch},
};

#[async_trait]
pub trait UserRepo: Send + Sync {
    async fn insert_user(&self, new: &NewUser) -> AppResult<User>;
    async fn find_user(&self, id: i64) -> AppResult<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn update_user(&self, id: i64, patch: &UserPatch) -> AppResult<Option<User>>;
    async fn admin_update_user(&self, id: i64, patch: &AdminUserPatch)
        -> AppResult<Option<User>>;
    async fn record_login(&self, id: i64) -> AppResult<()>;
    async fn list_users(&self) -> AppResult<Vec<User>>;
    /// Removes the user; owned skills, requests and reviews go with it.
    async fn delete_user(&self, id: i64) -> AppResult<bool>;
}

#[async_trait]
impl UserRepo for PgStore {
    async fn insert_user(&self, new: &NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, bio, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(&new.bio)
        .bind(new.role)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user(&self, id: i64) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE email = $1"#)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update_user(&self, id: i64, patch: &UserPatch) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                bio = COALESCE($3, bio),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.bio.as_deref())
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn admin_update_user(
        &self,
        id: i64,
        patch: &AdminUserPatch,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET role = COALESCE($2::user_role, role),
                is_active = COALESCE($3, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.role)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn record_login(&self, id: i64) -> AppResult<()> {
        sqlx::query(r#"UPDATE users SET last_login_at = NOW() WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let users =
            sqlx::query_as::<_, User>(r#"SELECT * FROM users ORDER BY created_at DESC, id DESC"#)
                .fetch_all(&self.pool)
                .await?;
        Ok(users)
    }

    async fn delete_user(&self, id: i64) -> AppResult<bool> {
        let res = sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
