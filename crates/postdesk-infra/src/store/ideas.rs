use async_trait::async_trait;

use postdesk_core::RepoError;
use postdesk_core::domain::ContentIdea;
use postdesk_core::ports::ContentIdeaRepository;

/// Fixed list of content ideas.
pub struct InMemoryContentIdeaRepository {
    ideas: Vec<ContentIdea>,
}

impl InMemoryContentIdeaRepository {
    pub fn new(ideas: Vec<ContentIdea>) -> Self {
        Self { ideas }
    }
}

impl Default for InMemoryContentIdeaRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ContentIdeaRepository for InMemoryContentIdeaRepository {
    async fn list(&self) -> Result<Vec<ContentIdea>, RepoError> {
        Ok(self.ideas.clone())
    }
}
