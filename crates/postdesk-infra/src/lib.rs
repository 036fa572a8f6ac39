//! # Postdesk Infrastructure
//!
//! Concrete implementations of the ports defined in `postdesk-core`.
//! Everything lives in process memory and is lost on restart.

pub mod seed;
pub mod store;

pub use store::{InMemoryContentIdeaRepository, InMemoryPostRepository};
