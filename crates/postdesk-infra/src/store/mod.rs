//! In-memory stores for posts and content ideas.

mod ideas;
mod posts;

pub use ideas::InMemoryContentIdeaRepository;
pub use posts::InMemoryPostRepository;
