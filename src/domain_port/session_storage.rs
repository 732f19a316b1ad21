#[derive(Debug, thiserror::Error)]
pub enum SessionStorageError {
    #[error("session value for '{key}' could not be decoded: {reason}")]
    Decode { key: String, reason: String },
    #[error("store error: {0}")]
    Store(String),
}

/// Read side of a per-session key-value store.
#[async_trait::async_trait]
pub trait SessionStorage: Send + Sync {
    /// Returns `None` when nothing is stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<String>, SessionStorageError>;
}
