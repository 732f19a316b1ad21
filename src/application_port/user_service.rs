use crate::domain_model::RegisteredUser;
use crate::domain_port::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("constraint violation: username '{username}' already exists")]
    ConstraintViolation { username: String },
    #[error("store error: {0}")]
    Store(String),
}

impl From<RepoError> for UserError {
    fn from(error: RepoError) -> Self {
        match error {
            RepoError::DuplicateUsername { username } => UserError::ConstraintViolation { username },
            RepoError::Store(e) => UserError::Store(e),
        }
    }
}

#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    async fn get_registered_users(&self) -> Result<Vec<RegisteredUser>, UserError>;
    async fn add_user(&self, user: RegisteredUser) -> Result<(), UserError>;
}
