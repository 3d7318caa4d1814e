use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub tags: Vec<String>,
    pub is_active: bool,
    pub view_count: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewSkill {
    pub owner_id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub level: String,
    pub tags: Vec<String>,
}

/// Owner edits to a listing; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Public catalog filters. Only active skills are ever listed.
#[derive(Debug, Clone, Default)]
pub struct SkillFilter {
    pub category: Option<String>,
    pub level: Option<String>,
    pub search: Option<String>,
}
