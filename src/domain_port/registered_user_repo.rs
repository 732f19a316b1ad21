use crate::domain_model::*;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("username '{username}' already exists")]
    DuplicateUsername { username: String },
    #[error("store error: {0}")]
    Store(String),
}

#[async_trait::async_trait]
pub trait RegisteredUserRepo: Send + Sync {
    /// Every stored user, each exactly once.
    async fn list(&self) -> Result<Vec<RegisteredUser>, RepoError>;

    /// Insert a row. Fails with `DuplicateUsername` if the username is taken,
    /// in which case nothing is written.
    async fn add(&self, user: &RegisteredUser) -> Result<(), RepoError>;
}
