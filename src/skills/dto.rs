use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::skills::repo_types::{NewSkill, Skill, SkillFilter, SkillPatch};

pub const DEFAULT_CATEGORY: &str = "other";
pub const DEFAULT_LEVEL: &str = "beginner";

pub const DEFAULT_PER_PAGE: i64 = 12;
pub const MAX_PER_PAGE: i64 = 100;
/// Highest page whose offset still fits in an `i64`.
pub const MAX_PAGE: i64 = i64::MAX / MAX_PER_PAGE;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[validate(length(min = 3, max = 100, message = "Skill name must be at least 3 characters"))]
    pub name: String,
    #[validate(length(min = 10, max = 5000, message = "Description must be at least 10 characters"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50, message = "Level must be at most 50 characters"))]
    pub level: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "At most 20 tags are allowed"))]
    pub tags: Vec<String>,
}

impl CreateSkillRequest {
    pub fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.category = non_empty(self.category.take());
        self.level = non_empty(self.level.take());
        self.tags = clean_tags(std::mem::take(&mut self.tags));
    }

    pub fn into_new_skill(self, owner_id: i64) -> NewSkill {
        NewSkill {
            owner_id,
            name: self.name,
            description: self.description,
            category: self.category.unwrap_or_else(|| DEFAULT_CATEGORY.into()),
            level: self.level.unwrap_or_else(|| DEFAULT_LEVEL.into()),
            tags: self.tags,
        }
    }
}

/// Owner edits. Every present field is validated on its own.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 3, max = 100, message = "Skill name must be at least 3 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 10, max = 5000, message = "Description must be at least 10 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Category must be 1-50 characters"))]
    pub category: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Level must be 1-50 characters"))]
    pub level: Option<String>,
    #[validate(length(max = 20, message = "At most 20 tags are allowed"))]
    pub tags: Option<Vec<String>>,
    #[serde(alias = "isActive")]
    pub is_active: Option<bool>,
}

impl UpdateSkillRequest {
    pub fn normalize(&mut self) {
        for field in [
            &mut self.name,
            &mut self.description,
            &mut self.category,
            &mut self.level,
        ] {
            if let Some(v) = field.as_mut() {
                *v = v.trim().to_string();
            }
        }
        self.tags = self.tags.take().map(clean_tags);
    }

    pub fn into_patch(self) -> SkillPatch {
        SkillPatch {
            name: self.name,
            description: self.description,
            category: self.category,
            level: self.level,
            tags: self.tags,
            is_active: self.is_active,
        }
    }
}

/// Query string of `GET /skills`. Empty filter values are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ListSkillsQuery {
    pub category: Option<String>,
    pub level: Option<String>,
    pub search: Option<String>,
    pub page: Option<i64>,
    #[serde(alias = "perPage")]
    pub per_page: Option<i64>,
}

impl ListSkillsQuery {
    pub fn filter(&self) -> SkillFilter {
        SkillFilter {
            category: non_empty(self.category.clone()),
            level: non_empty(self.level.clone()),
            search: non_empty(self.search.clone()),
        }
    }

    /// Returns `(page, per_page)` with defaults applied and bounds enforced.
    pub fn paging(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let per_page = self
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        (page, per_page)
    }
}

#[derive(Debug, Serialize)]
pub struct SkillResponse {
    pub message: &'static str,
    pub skill: Skill,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
