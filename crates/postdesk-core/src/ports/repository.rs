use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{ContentIdea, NewPost, Post, PostId, WorkflowStage};
use crate::error::{DomainError, RepoError};

/// Post store. Owns the ordered collection, most recent first.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in collection order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError>;

    /// Validate the form payload and prepend the new draft.
    ///
    /// Nothing changes when validation fails.
    async fn create(&self, new_post: NewPost, now: DateTime<Utc>) -> Result<Post, DomainError>;

    /// Move a post one stage forward.
    ///
    /// `target` defaults to the stage after the current one. Returns `Ok(None)`
    /// and leaves the collection untouched when no post has this id.
    async fn advance(
        &self,
        id: &PostId,
        target: Option<WorkflowStage>,
    ) -> Result<Option<Post>, DomainError>;
}

/// Read-only store of suggested topics.
#[async_trait]
pub trait ContentIdeaRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ContentIdea>, RepoError>;

    /// Ideas flagged for the dashboard.
    async fn suggested(&self) -> Result<Vec<ContentIdea>, RepoError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|idea| idea.suggested)
            .collect())
    }
}
