use crate::domain_port::SessionStorageError;

pub const SESSION_USERNAME_KEY: &str = "username";
pub const SESSION_PASSWORD_KEY: &str = "password";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("session storage error: {0}")]
    Store(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<SessionStorageError> for AuthError {
    fn from(error: SessionStorageError) -> Self {
        match error {
            SessionStorageError::Store(e) => AuthError::Store(e),
            e @ SessionStorageError::Decode { .. } => AuthError::InternalError(e.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl LoginInput {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        LoginInput {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginInput")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
pub trait AuthorizationService: Send + Sync {
    /// `Ok(false)` for a mismatch or when no credentials are stored;
    /// `Err` only when session storage itself fails.
    async fn login(&self, request: LoginInput) -> Result<bool, AuthError>;
}
