use crate::domain_port::*;
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: DashMap<String, String>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&self, key: &str) -> Option<String> {
        self.items.remove(key).map(|(_, value)| value)
    }
}

#[async_trait::async_trait]
impl SessionStorage for MemorySessionStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        Ok(self.items.get(key).map(|value| value.clone()))
    }
}
