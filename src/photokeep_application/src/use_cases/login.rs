use photokeep_core::{Credentials, Decision, UserDirectory, UserDirectoryError};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User directory error: {0}")]
    UserDirectoryError(#[from] UserDirectoryError),
}

/// Login use case - verifies submitted credentials against the directory
pub struct LoginUseCase<'a, D>
where
    D: UserDirectory,
{
    directory: &'a D,
}

impl<'a, D> LoginUseCase<'a, D>
where
    D: UserDirectory,
{
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Execute the login use case
    ///
    /// Looks up the account for the submitted email and compares the stored
    /// credential against the submitted one. Each call is stateless; a
    /// directory fault aborts the request and is never retried.
    ///
    /// # Returns
    /// `Decision::Success`, `Decision::UserNotFound` or
    /// `Decision::InvalidPassword`
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, credentials))]
    pub async fn execute(&self, credentials: Credentials) -> Result<Decision, LoginError> {
        let Some(account) = self.directory.get_user(credentials.email()).await? else {
            return Ok(Decision::UserNotFound);
        };

        if account.password_matches(credentials.password()) {
            Ok(Decision::Success)
        } else {
            Ok(Decision::InvalidPassword)
        }
    }
}
