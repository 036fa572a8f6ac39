//! Data Transfer Objects - request types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a new post.
///
/// Status and workflow stage are not accepted: new posts always start as drafts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: String,
    /// Lowercase platform names, e.g. `"instagram"`.
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
}

/// Request to move a post along the workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvanceStageRequest {
    /// Kebab-case stage name. Omit to move to the next stage.
    #[serde(default)]
    pub stage: Option<String>,
}

/// Query string for listing content ideas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaQuery {
    #[serde(default)]
    pub suggested: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_ignores_status_fields() {
        let req: CreatePostRequest = serde_json::from_value(serde_json::json!({
            "content": "Hello",
            "platforms": ["twitter"],
            "status": "published",
            "workflow_stage": "analytics"
        }))
        .unwrap();

        assert_eq!(req.content, "Hello");
        assert_eq!(req.platforms, vec!["twitter"]);
        assert!(req.images.is_empty());
        assert!(req.scheduled_date.is_none());
    }
}
