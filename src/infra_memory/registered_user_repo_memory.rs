use crate::domain_model::*;
use crate::domain_port::*;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Users keyed by username. The entry API makes the uniqueness check and the
/// insert a single step under the shard lock.
#[derive(Debug, Default)]
pub struct MemoryRegisteredUserRepo {
    users: DashMap<String, RegisteredUser>,
}

impl MemoryRegisteredUserRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RegisteredUserRepo for MemoryRegisteredUserRepo {
    async fn list(&self) -> Result<Vec<RegisteredUser>, RepoError> {
        let mut users: Vec<RegisteredUser> =
            self.users.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    async fn add(&self, user: &RegisteredUser) -> Result<(), RepoError> {
        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(RepoError::DuplicateUsername {
                username: user.username.clone(),
            }),
            Entry::Vacant(vacant) => {
                vacant.insert(user.clone());
                Ok(())
            }
        }
    }
}
