//! Domain entities - the core business objects.

mod idea;
mod post;
mod workflow;

pub use idea::{ContentIdea, Priority};
pub use post::{NewPost, Platform, Post, PostAnalytics, PostId, PostStatus, prepend_post};
pub use workflow::{WorkflowStage, ensure_transition, move_workflow_stage};

pub(crate) use post::engagement_rate;
