use crate::domain::models::{NewUser, User};
use async_trait::async_trait;
use thiserror::Error;

/// Any failure reported by the storage layer. Transient and permanent
/// failures are not told apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PersistenceError(pub String);

impl PersistenceError {
    pub fn new(description: impl Into<String>) -> PersistenceError {
        PersistenceError(description.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores `user` and returns it with its freshly assigned id.
    async fn create(&self, user: NewUser) -> Result<User, PersistenceError>;
}
