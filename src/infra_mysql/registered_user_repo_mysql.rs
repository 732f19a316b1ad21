use super::util::is_dup_key;
use crate::domain_model::*;
use crate::domain_port::*;
use sqlx::{MySqlPool, Row};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS registered_user (
    id       BINARY(16)   NOT NULL PRIMARY KEY,
    username VARCHAR(255) NOT NULL,
    password VARCHAR(255) NOT NULL,
    UNIQUE KEY uk_registered_user_username (username)
) DEFAULT CHARSET = utf8mb4 COLLATE = utf8mb4_bin
"#;

const USERNAME_KEY: &str = "uk_registered_user_username";

pub struct MySqlRegisteredUserRepo {
    pool: MySqlPool,
}

impl MySqlRegisteredUserRepo {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlRegisteredUserRepo { pool }
    }

    /// Creates the `registered_user` table if it is missing. The binary
    /// collation keeps the username index case-sensitive.
    pub async fn ensure_schema(&self) -> Result<(), RepoError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Store(format!("create registered_user: {e}")))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RegisteredUserRepo for MySqlRegisteredUserRepo {
    async fn list(&self) -> Result<Vec<RegisteredUser>, RepoError> {
        let rows = sqlx::query("SELECT id, username, password FROM registered_user")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::Store(format!("query registered_user: {e}")))?;

        rows.iter()
            .map(|row| {
                let decode = |e: sqlx::Error| RepoError::Store(format!("decode registered_user: {e}"));
                Ok(RegisteredUser {
                    id: row.try_get::<UserId, _>("id").map_err(decode)?,
                    username: row.try_get::<String, _>("username").map_err(decode)?,
                    password: row.try_get::<String, _>("password").map_err(decode)?,
                })
            })
            .collect()
    }

    async fn add(&self, user: &RegisteredUser) -> Result<(), RepoError> {
        sqlx::query(
            r#"
INSERT INTO registered_user (id, username, password)
VALUES (?, ?, ?)
"#,
        )
        .bind(user.id.0.as_bytes() as &[u8])
        .bind(&user.username)
        .bind(&user.password)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_dup_key(&e) && e.to_string().contains(USERNAME_KEY) {
                RepoError::DuplicateUsername {
                    username: user.username.clone(),
                }
            } else {
                RepoError::Store(e.to_string())
            }
        })?;

        Ok(())
    }
}
