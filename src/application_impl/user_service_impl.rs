use crate::application_port::{UserError, UserService};
use crate::domain_model::RegisteredUser;
use crate::domain_port::RegisteredUserRepo;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct RealUserService {
    user_repo: Arc<dyn RegisteredUserRepo>,
}

impl RealUserService {
    pub fn new(user_repo: Arc<dyn RegisteredUserRepo>) -> RealUserService {
        RealUserService { user_repo }
    }
}

#[async_trait::async_trait]
impl UserService for RealUserService {
    async fn get_registered_users(&self) -> Result<Vec<RegisteredUser>, UserError> {
        let users = self.user_repo.list().await?;
        debug!(count = users.len(), "listed registered users");
        Ok(users)
    }

    async fn add_user(&self, user: RegisteredUser) -> Result<(), UserError> {
        self.user_repo.add(&user).await.map_err(|e| {
            let e = UserError::from(e);
            if let UserError::ConstraintViolation { username } = &e {
                warn!(%username, "rejected duplicate username");
            }
            e
        })?;
        debug!(id = %user.id, username = %user.username, "registered user added");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_model::UserId;
    use crate::domain_port::RepoError;
    use crate::infra_memory::MemoryRegisteredUserRepo;

    fn service() -> RealUserService {
        RealUserService::new(Arc::new(MemoryRegisteredUserRepo::new()))
    }

    #[tokio::test]
    async fn no_users_gives_empty_list() {
        let users = service().get_registered_users().await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn added_user_is_listed() {
        let service = service();
        let id = UserId::new_v4();
        service
            .add_user(RegisteredUser::new(id, "newuser", "newpassword"))
            .await
            .unwrap();

        let users = service.get_registered_users().await.unwrap();
        let added = users.iter().find(|u| u.username == "newuser").unwrap();
        assert_eq!(added.id, id);
        assert_eq!(added.password, "newpassword");
    }

    #[tokio::test]
    async fn duplicate_username_is_a_constraint_violation() {
        let service = service();
        service
            .add_user(RegisteredUser::new(UserId::new_v4(), "existinguser", "password"))
            .await
            .unwrap();

        let err = service
            .add_user(RegisteredUser::new(UserId::new_v4(), "existinguser", "newpassword"))
            .await
            .unwrap_err();
        assert!(
            matches!(err, UserError::ConstraintViolation { ref username } if username == "existinguser")
        );
        assert_eq!(service.get_registered_users().await.unwrap().len(), 1);
    }

    struct UnavailableRepo;

    #[async_trait::async_trait]
    impl RegisteredUserRepo for UnavailableRepo {
        async fn list(&self) -> Result<Vec<RegisteredUser>, RepoError> {
            Err(RepoError::Store("pool timed out".to_string()))
        }

        async fn add(&self, _user: &RegisteredUser) -> Result<(), RepoError> {
            Err(RepoError::Store("pool timed out".to_string()))
        }
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let service = RealUserService::new(Arc::new(UnavailableRepo));
        assert!(matches!(
            service.get_registered_users().await,
            Err(UserError::Store(_))
        ));
        assert!(matches!(
            service
                .add_user(RegisteredUser::new(UserId::new_v4(), "user1", "pw1"))
                .await,
            Err(UserError::Store(_))
        ));
    }
}
