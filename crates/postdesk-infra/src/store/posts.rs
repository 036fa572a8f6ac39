//! In-memory post store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use postdesk_core::domain::{
    NewPost, Post, PostId, WorkflowStage, ensure_transition, move_workflow_stage, prepend_post,
};
use postdesk_core::ports::PostRepository;
use postdesk_core::{DomainError, RepoError};

/// Post collection held behind an async RwLock.
///
/// Every mutation swaps in a whole new collection while holding the write
/// lock, so readers always see a complete before or after state.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start from an existing collection, most recent first.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| &p.id == id).cloned())
    }

    async fn create(&self, new_post: NewPost, now: DateTime<Utc>) -> Result<Post, DomainError> {
        let mut post = Post::create(new_post, now)?;

        let mut posts = self.posts.write().await;
        // Time-based ids collide within a millisecond.
        while posts.iter().any(|p| p.id == post.id) {
            post.id = post.id.successor();
        }

        *posts = prepend_post(std::mem::take(&mut *posts), post.clone());

        tracing::info!(
            post_id = %post.id,
            platforms = post.platforms.len(),
            "Post created"
        );
        Ok(post)
    }

    async fn advance(
        &self,
        id: &PostId,
        target: Option<WorkflowStage>,
    ) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;

        let Some(current) = posts.iter().find(|p| &p.id == id).map(|p| p.workflow_stage) else {
            tracing::debug!(post_id = %id, "No post to advance");
            return Ok(None);
        };

        // Nothing follows the terminal stage.
        let Some(stage) = target.or_else(|| current.next()) else {
            return Err(DomainError::InvalidTransition {
                from: current,
                to: current,
            });
        };
        ensure_transition(current, stage)?;

        *posts = move_workflow_stage(std::mem::take(&mut *posts), id, stage);
        let moved = posts.iter().find(|p| &p.id == id).cloned();

        if let Some(post) = &moved {
            tracing::info!(
                post_id = %post.id,
                from = %current,
                stage = %post.workflow_stage,
                status = %post.status,
                "Post moved to next workflow stage"
            );
        }
        Ok(moved)
    }
}
