use crate::domain_port::*;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

/// Session values stored as JSON under `{prefix}:{key}`, the way browser
/// session storage serializes them.
pub struct RedisSessionStorage {
    conn: ConnectionManager,
    prefix: String,
}

impl RedisSessionStorage {
    pub fn new(conn: ConnectionManager, prefix: impl Into<String>) -> Self {
        RedisSessionStorage {
            conn,
            prefix: prefix.into(),
        }
    }

    fn key(&self, key: &str) -> String {
        format!("{}:{}", self.prefix, key)
    }
}

pub(crate) fn decode_item(key: &str, raw: &str) -> Result<String, SessionStorageError> {
    serde_json::from_str::<String>(raw).map_err(|e| SessionStorageError::Decode {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait::async_trait]
impl SessionStorage for RedisSessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .get(self.key(key))
            .await
            .map_err(|e| SessionStorageError::Store(e.to_string()))?;

        raw.map(|raw| decode_item(key, &raw)).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_json_string() {
        assert_eq!(decode_item("username", "\"testuser\"").unwrap(), "testuser");
        assert_eq!(decode_item("password", "\"p\\\"w\"").unwrap(), "p\"w");
    }

    #[test]
    fn rejects_non_string_values() {
        let err = decode_item("username", "testuser").unwrap_err();
        assert!(matches!(err, SessionStorageError::Decode { ref key, .. } if key == "username"));

        assert!(decode_item("username", "42").is_err());
    }

    #[tokio::test]
    #[ignore = "requires a running redis, set STOCKREADER_REDIS_DSN"]
    async fn reads_prefixed_json_values() -> anyhow::Result<()> {
        let dsn = std::env::var("STOCKREADER_REDIS_DSN")?;
        let client = redis::Client::open(dsn)?;
        let mut conn = client.get_connection_manager().await?;

        let prefix = format!("session-test:{}", uuid::Uuid::new_v4());
        let _: () = conn
            .set(format!("{prefix}:username"), "\"testuser\"")
            .await?;

        let storage = RedisSessionStorage::new(conn.clone(), prefix.clone());
        assert_eq!(
            storage.get_item("username").await?.as_deref(),
            Some("testuser")
        );
        assert_eq!(storage.get_item("password").await?, None);

        let _: () = conn.del(format!("{prefix}:username")).await?;
        Ok(())
    }
}
