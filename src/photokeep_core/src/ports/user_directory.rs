use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user_account::UserAccount};

// UserDirectory port trait and errors
#[derive(Debug, Error)]
pub enum UserDirectoryError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserDirectoryError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Account lookup and creation, backed by whatever store the service is
/// wired with. Lookup absence is `Ok(None)`; errors are reserved for
/// storage faults, which callers propagate rather than retry.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn get_user(&self, email: &Email) -> Result<Option<UserAccount>, UserDirectoryError>;
    async fn add_user(&self, account: UserAccount) -> Result<(), UserDirectoryError>;
}
