//! # Postdesk Core
//!
//! The domain layer of Postdesk.
//! Posts, the editorial workflow stage machine and the read-only view
//! projections live here, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod views;

pub use error::{DomainError, RepoError};
