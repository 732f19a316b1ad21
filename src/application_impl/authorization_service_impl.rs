use crate::application_port::*;
use crate::domain_port::SessionStorage;
use std::sync::Arc;
use tracing::debug;

pub struct RealAuthorizationService {
    session_storage: Arc<dyn SessionStorage>,
}

impl RealAuthorizationService {
    pub fn new(session_storage: Arc<dyn SessionStorage>) -> Self {
        Self { session_storage }
    }
}

#[async_trait::async_trait]
impl AuthorizationService for RealAuthorizationService {
    async fn login(&self, request: LoginInput) -> Result<bool, AuthError> {
        let LoginInput { username, password } = request;

        let (stored_username, stored_password) = tokio::try_join!(
            self.session_storage.get_item(SESSION_USERNAME_KEY),
            self.session_storage.get_item(SESSION_PASSWORD_KEY),
        )?;

        let ok = stored_username.as_deref() == Some(username.as_str())
            && stored_password.as_deref() == Some(password.as_str());
        debug!(%username, ok, "session login checked");

        Ok(ok)
    }
}
