//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::Utc;
use postdesk_core::ports::{ContentIdeaRepository, PostRepository};
use postdesk_infra::{InMemoryContentIdeaRepository, InMemoryPostRepository, seed};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub ideas: Arc<dyn ContentIdeaRepository>,
}

impl AppState {
    /// Build the in-memory stores, optionally loaded with sample data.
    pub fn new(seed_sample_data: bool) -> Self {
        let (posts, ideas) = if seed_sample_data {
            let posts = seed::sample_posts(Utc::now());
            let ideas = seed::sample_ideas();
            tracing::info!(
                posts = posts.len(),
                ideas = ideas.len(),
                "Loaded sample data"
            );
            (posts, ideas)
        } else {
            tracing::info!("Starting with empty stores");
            (Vec::new(), Vec::new())
        };

        Self {
            posts: Arc::new(InMemoryPostRepository::with_posts(posts)),
            ideas: Arc::new(InMemoryContentIdeaRepository::new(ideas)),
        }
    }
}
