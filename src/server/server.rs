use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_memory::*;
use crate::infra_mysql::*;
use crate::infra_redis::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::anyhow;
use sqlx::{MySql, Pool};
use std::sync::Arc;

pub struct Server {
    pub authorization_service: Arc<dyn AuthorizationService>,
    pub user_service: Arc<dyn UserService>,
    pool: Option<Pool<MySql>>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let session_storage: Arc<dyn SessionStorage> = match settings.session.backend.as_str() {
            "memory" => {
                let storage = MemorySessionStorage::new();
                for (key, value) in &settings.session.items {
                    storage.set_item(key.as_str(), value.as_str());
                }
                debug!(seeded = settings.session.items.len(), "memory session storage ready");
                Arc::new(storage)
            }
            "redis" => {
                let dsn = settings
                    .session
                    .redis_dsn
                    .as_deref()
                    .ok_or_else(|| anyhow!("session.redis_dsn is required for the redis backend"))?;
                let redis_client = redis::Client::open(dsn)?;
                let redis_manager = redis_client.get_connection_manager().await?;
                Arc::new(RedisSessionStorage::new(
                    redis_manager,
                    settings.session.prefix.clone(),
                ))
            }
            other => return Err(anyhow!("Unknown session backend: {}", other)),
        };

        let mut pool = None;
        let user_repo: Arc<dyn RegisteredUserRepo> = match settings.user.backend.as_str() {
            "memory" => Arc::new(MemoryRegisteredUserRepo::new()),
            "mysql" => {
                let dsn = settings
                    .user
                    .mysql_dsn
                    .as_deref()
                    .ok_or_else(|| anyhow!("user.mysql_dsn is required for the mysql backend"))?;
                let mysql_pool = Pool::<MySql>::connect(dsn).await?;
                let repo = MySqlRegisteredUserRepo::new(mysql_pool.clone());
                repo.ensure_schema().await?;
                pool = Some(mysql_pool);
                Arc::new(repo)
            }
            other => return Err(anyhow!("Unknown user backend: {}", other)),
        };

        let authorization_service: Arc<dyn AuthorizationService> =
            Arc::new(RealAuthorizationService::new(session_storage));
        let user_service: Arc<dyn UserService> = Arc::new(RealUserService::new(user_repo));

        info!(
            session_backend = %settings.session.backend,
            user_backend = %settings.user.backend,
            "server started"
        );

        Ok(Self {
            authorization_service,
            user_service,
            pool,
        })
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_model::{RegisteredUser, UserId};
    use crate::settings::{Log, Session, User};

    fn settings(session_backend: &str, user_backend: &str) -> Settings {
        Settings {
            log: Log {
                filter: "info".to_string(),
            },
            session: Session {
                backend: session_backend.to_string(),
                redis_dsn: None,
                prefix: "session".to_string(),
                items: Default::default(),
            },
            user: User {
                backend: user_backend.to_string(),
                mysql_dsn: None,
            },
        }
    }

    #[tokio::test]
    async fn memory_backends_are_wired() {
        let server = Server::try_new(&settings("memory", "memory")).await.unwrap();

        server
            .user_service
            .add_user(RegisteredUser::new(UserId::new_v4(), "user1", "pw1"))
            .await
            .unwrap();
        assert_eq!(server.user_service.get_registered_users().await.unwrap().len(), 1);

        // no session items configured
        let ok = server
            .authorization_service
            .login(LoginInput::new("user1", "pw1"))
            .await
            .unwrap();
        assert!(!ok);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn memory_session_starts_with_configured_items() {
        let mut settings = settings("memory", "memory");
        settings
            .session
            .items
            .insert(SESSION_USERNAME_KEY.to_string(), "demo".to_string());
        settings
            .session
            .items
            .insert(SESSION_PASSWORD_KEY.to_string(), "demo-password".to_string());
        let server = Server::try_new(&settings).await.unwrap();

        let service = &server.authorization_service;
        assert!(
            service
                .login(LoginInput::new("demo", "demo-password"))
                .await
                .unwrap()
        );
        assert!(!service.login(LoginInput::new("demo", "wrong")).await.unwrap());
    }

    #[tokio::test]
    async fn dev_settings_seed_a_usable_session() {
        let settings = crate::settings::parse_settings(Some("settings/dev.toml")).unwrap();
        let server = Server::try_new(&settings).await.unwrap();
        let ok = server
            .authorization_service
            .login(LoginInput::new("demo", "demo-password"))
            .await
            .unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn unknown_backend_is_rejected() {
        let err = Server::try_new(&settings("cookie", "memory")).await.err().unwrap();
        assert!(err.to_string().contains("cookie"));

        let err = Server::try_new(&settings("memory", "sqlite")).await.err().unwrap();
        assert!(err.to_string().contains("sqlite"));
    }

    #[tokio::test]
    async fn mysql_backend_requires_dsn() {
        let err = Server::try_new(&settings("memory", "mysql")).await.err().unwrap();
        assert!(err.to_string().contains("mysql_dsn"));
    }
}
