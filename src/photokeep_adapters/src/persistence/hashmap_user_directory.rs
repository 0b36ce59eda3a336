use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use photokeep_core::{Email, UserAccount, UserDirectory, UserDirectoryError};

/// In-memory user directory for tests and local development.
///
/// Clones share the same map through the inner `Arc<RwLock<_>>`.
#[derive(Default, Clone)]
pub struct HashMapUserDirectory {
    users: Arc<RwLock<HashMap<Email, UserAccount>>>,
}

impl HashMapUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserDirectory for HashMapUserDirectory {
    async fn get_user(&self, email: &Email) -> Result<Option<UserAccount>, UserDirectoryError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn add_user(&self, account: UserAccount) -> Result<(), UserDirectoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(account.email()) {
            return Err(UserDirectoryError::UserAlreadyExists);
        }
        users.insert(account.email().clone(), account);
        Ok(())
    }
}
