//! Editorial workflow stage machine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Post, PostId, PostStatus};
use crate::error::DomainError;

/// Position of a post in the editorial pipeline.
///
/// Stages only ever move forward, one at a time, and `Analytics` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowStage {
    ContentCreation,
    Review,
    Approval,
    Scheduling,
    Published,
    Analytics,
}

impl WorkflowStage {
    /// All stages in pipeline order.
    pub const ALL: [WorkflowStage; 6] = [
        WorkflowStage::ContentCreation,
        WorkflowStage::Review,
        WorkflowStage::Approval,
        WorkflowStage::Scheduling,
        WorkflowStage::Published,
        WorkflowStage::Analytics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowStage::ContentCreation => "content-creation",
            WorkflowStage::Review => "review",
            WorkflowStage::Approval => "approval",
            WorkflowStage::Scheduling => "scheduling",
            WorkflowStage::Published => "published",
            WorkflowStage::Analytics => "analytics",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkflowStage::ContentCreation => "Content Creation",
            WorkflowStage::Review => "Review",
            WorkflowStage::Approval => "Approval",
            WorkflowStage::Scheduling => "Scheduling",
            WorkflowStage::Published => "Published",
            WorkflowStage::Analytics => "Analytics",
        }
    }

    pub fn next(self) -> Option<WorkflowStage> {
        match self {
            WorkflowStage::ContentCreation => Some(WorkflowStage::Review),
            WorkflowStage::Review => Some(WorkflowStage::Approval),
            WorkflowStage::Approval => Some(WorkflowStage::Scheduling),
            WorkflowStage::Scheduling => Some(WorkflowStage::Published),
            WorkflowStage::Published => Some(WorkflowStage::Analytics),
            WorkflowStage::Analytics => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Status forced onto a post entering this stage, if any.
    pub fn status_override(self) -> Option<PostStatus> {
        match self {
            WorkflowStage::Scheduling => Some(PostStatus::Scheduled),
            WorkflowStage::Published => Some(PostStatus::Published),
            _ => None,
        }
    }
}

impl fmt::Display for WorkflowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkflowStage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkflowStage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown workflow stage: {s}")))
    }
}

/// Only the single next stage is reachable from `from`.
pub fn ensure_transition(from: WorkflowStage, to: WorkflowStage) -> Result<(), DomainError> {
    if from.next() == Some(to) {
        Ok(())
    } else {
        Err(DomainError::InvalidTransition { from, to })
    }
}

/// Replace the collection with one where post `id` sits at `stage`.
///
/// Other posts pass through untouched; an unknown id yields the same collection.
pub fn move_workflow_stage(posts: Vec<Post>, id: &PostId, stage: WorkflowStage) -> Vec<Post> {
    posts
        .into_iter()
        .map(|mut post| {
            if &post.id == id {
                post.move_to_stage(stage);
            }
            post
        })
        .collect()
}
