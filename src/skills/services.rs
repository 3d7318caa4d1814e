//! Skill catalog operations.

use tracing::info;
use validator::Validate;

use crate::{
    access::ensure_owner,
    dto::Page,
    error::{AppError, AppResult},
    skills::{
        dto::{CreateSkillRequest, ListSkillsQuery, UpdateSkillRequest},
        repo::SkillRepo,
        repo_types::Skill,
    },
    store::Store,
};

fn skill_not_found() -> AppError {
    AppError::not_found("Skill not found")
}

pub async fn create(
    store: &dyn Store,
    owner_id: i64,
    mut input: CreateSkillRequest,
) -> AppResult<Skill> {
    input.normalize();
    input.validate()?;

    let skill = store.insert_skill(&input.into_new_skill(owner_id)).await?;
    info!(skill_id = skill.id, owner_id, "skill created");
    Ok(skill)
}

pub async fn list(store: &dyn Store, query: &ListSkillsQuery) -> AppResult<Page<Skill>> {
    let (page, per_page) = query.paging();
    let (items, total) = store
        .search_skills(&query.filter(), per_page, (page - 1).saturating_mul(per_page))
        .await?;
    Ok(Page::new(items, total, page, per_page))
}

/// Public detail view; counts as one view.
pub async fn get(store: &dyn Store, id: i64) -> AppResult<Skill> {
    store.view_skill(id).await?.ok_or_else(skill_not_found)
}

pub async fn list_mine(store: &dyn Store, owner_id: i64) -> AppResult<Vec<Skill>> {
    store.list_skills_by_owner(owner_id).await
}

pub async fn update(
    store: &dyn Store,
    id: i64,
    user_id: i64,
    mut input: UpdateSkillRequest,
) -> AppResult<Skill> {
    let skill = store.find_skill(id).await?.ok_or_else(skill_not_found)?;
    ensure_owner(&skill, user_id, "update this skill")?;

    input.normalize();
    input.validate()?;

    let skill = store
        .update_skill(id, &input.into_patch())
        .await?
        .ok_or_else(skill_not_found)?;
    info!(skill_id = skill.id, user_id, "skill updated");
    Ok(skill)
}

pub async fn delete(store: &dyn Store, id: i64, user_id: i64) -> AppResult<()> {
    let skill = store.find_skill(id).await?.ok_or_else(skill_not_found)?;
    ensure_owner(&skill, user_id, "delete this skill")?;

    if !store.delete_skill(id).await? {
        return Err(skill_not_found());
    }
    info!(skill_id = id, user_id, "skill deleted");
    Ok(())
}
