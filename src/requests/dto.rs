use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::requests::repo_types::{ExchangeRequest, NewRequest, Priority};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestRequest {
    #[serde(alias = "skillId")]
    pub skill_id: i64,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, alias = "preferredSchedule")]
    #[validate(length(max = 200, message = "Preferred schedule must be at most 200 characters"))]
    pub preferred_schedule: Option<String>,
}

impl CreateRequestRequest {
    pub fn normalize(&mut self) {
        self.message = self.message.trim().to_string();
        self.preferred_schedule = self
            .preferred_schedule
            .take()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
    }

    pub fn into_new_request(self, requester_id: i64) -> NewRequest {
        NewRequest {
            skill_id: self.skill_id,
            requester_id,
            message: self.message,
            priority: self.priority,
            preferred_schedule: self.preferred_schedule,
        }
    }
}

/// Body of `PUT /requests/{id}`. `status` is parsed only after the caller is
/// known to own the skill.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    pub status: String,
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RequestResponse {
    pub message: &'static str,
    pub request: ExchangeRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_camel_case_body() {
        let mut req: CreateRequestRequest = serde_json::from_value(serde_json::json!({
            "skillId": 4,
            "message": " hi ",
            "preferredSchedule": "  ",
        }))
        .expect("parse");
        req.normalize();
        assert_eq!(req.skill_id, 4);
        assert_eq!(req.priority, Priority::Medium);
        assert_eq!(req.message, "hi");
        assert_eq!(req.preferred_schedule, None);
    }

    #[test]
    fn long_message_is_rejected() {
        let req = CreateRequestRequest {
            skill_id: 1,
            message: "x".repeat(2001),
            priority: Priority::High,
            preferred_schedule: None,
        };
        assert!(req.validate().is_err());
    }
}
