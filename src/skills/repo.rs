use async_trait::async_trait;

use crate::{
    db::{like_pattern, PgStore},
    error::AppResult,
    skills::repo_types::{NewSkill, Skill, SkillFilter, SkillPatch},
};

#[async_trait]
pub trait SkillRepo: Send + Sync {
    async fn insert_skill(&self, new: &NewSkill) -> AppResult<Skill>;
    /// Any skill, active or not.
    async fn find_skill(&self, id: i64) -> AppResult<Option<Skill>>;
    /// Bumps the view counter of an active skill and returns it.
    async fn view_skill(&self, id: i64) -> AppResult<Option<Skill>>;
    async fn search_skills(
        &self,
        filter: &SkillFilter,
        limit: i64,
        offset: i64,
    ) -> AppResult<(Vec<Skill>, i64)>;
    async fn list_skills_by_owner(&self, owner_id: i64) -> AppResult<Vec<Skill>>;
    async fn list_all_skills(&self) -> AppResult<Vec<Skill>>;
    async fn update_skill(&self, id: i64, patch: &SkillPatch) -> AppResult<Option<Skill>>;
    /// Removes the skill together with its requests and reviews.
    async fn delete_skill(&self, id: i64) -> AppResult<bool>;
}

#[async_trait]
impl SkillRepo for PgStore {
    async fn insert_skill(&self, new: &NewSkill) -> AppResult<Skill> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (owner_id, name, description, category, level, tags)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.owner_id)
        .bind(&new.name)
        .bind(&new.description)
        .bind(&new.category)
        .bind(&new.level)
        .bind(&new.tags)
        .fetch_one(&self.pool)
        .await?;
        Ok(skill)
    }

    async fn find_skill(&self, id: i64) -> AppResult<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(skill)
    }

    async fn view_skill(&self, id: i64) -> AppResult<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET view_count = view_count + 1
            WHERE id = $1 AND is_active
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(skill)
    }

    async fn search_skills(
        &self,
        filter: &SkillFilter,
        limit: i64,
        offset: i64,
    ) -> AppResult<(Vec<Skill>, i64)> {
        let pattern = filter.search.as_deref().map(like_pattern);

        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT * FROM skills
            WHERE is_active
              AND ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR level = $2)
              AND ($3::text IS NULL
                   OR name ILIKE $3
                   OR description ILIKE $3
                   OR EXISTS (SELECT 1 FROM unnest(tags) AS t(tag) WHERE t.tag ILIKE $3))
            ORDER BY created_at DESC, id DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filter.category.as_deref())
        .bind(filter.level.as_deref())
        .bind(pattern.as_deref())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM skills
            WHERE is_active
              AND ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR level = $2)
              AND ($3::text IS NULL
                   OR name ILIKE $3
                   OR description ILIKE $3
                   OR EXISTS (SELECT 1 FROM unnest(tags) AS t(tag) WHERE t.tag ILIKE $3))
            "#,
        )
        .bind(filter.category.as_deref())
        .bind(filter.level.as_deref())
        .bind(pattern.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok((skills, total))
    }

    async fn list_skills_by_owner(&self, owner_id: i64) -> AppResult<Vec<Skill>> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT * FROM skills WHERE owner_id = $1 ORDER BY created_at DESC, id DESC"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(skills)
    }

    async fn list_all_skills(&self) -> AppResult<Vec<Skill>> {
        let skills =
            sqlx::query_as::<_, Skill>(r#"SELECT * FROM skills ORDER BY created_at DESC, id DESC"#)
                .fetch_all(&self.pool)
                .await?;
        Ok(skills)
    }

    async fn update_skill(&self, id: i64, patch: &SkillPatch) -> AppResult<Option<Skill>> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                level = COALESCE($5, level),
                tags = COALESCE($6, tags),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.category.as_deref())
        .bind(patch.level.as_deref())
        .bind(patch.tags.as_ref())
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await?;
        Ok(skill)
    }

    async fn delete_skill(&self, id: i64) -> AppResult<bool> {
        let res = sqlx::query(r#"DELETE FROM skills WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
