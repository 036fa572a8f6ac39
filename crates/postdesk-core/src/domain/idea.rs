use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Suggested topic for future posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentIdea {
    pub id: String,
    pub title: String,
    pub category: String,
    pub priority: Priority,
    /// Shown on the dashboard when set.
    pub suggested: bool,
}

impl ContentIdea {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        priority: Priority,
        suggested: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            priority,
            suggested,
        }
    }
}
