use photokeep_core::{Credentials, Decision, UserAccount, UserDirectory, UserDirectoryError};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User directory error: {0}")]
    UserDirectoryError(#[from] UserDirectoryError),
}

/// Register use case - creates an account unless the email is taken
pub struct RegisterUseCase<'a, D>
where
    D: UserDirectory,
{
    directory: &'a D,
}

impl<'a, D> RegisterUseCase<'a, D>
where
    D: UserDirectory,
{
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Execute the register use case
    ///
    /// Rejects the submission when an account already exists for the email;
    /// otherwise creation is delegated to the directory. A lost insert race
    /// is reported the same way as an up-front duplicate.
    ///
    /// # Returns
    /// `Decision::Success` or `Decision::DuplicateEmail`
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, credentials))]
    pub async fn execute(&self, credentials: Credentials) -> Result<Decision, RegisterError> {
        if self.directory.get_user(credentials.email()).await?.is_some() {
            return Ok(Decision::DuplicateEmail);
        }

        let (email, password) = credentials.into_parts();
        match self.directory.add_user(UserAccount::new(email, password)).await {
            Ok(()) => Ok(Decision::Success),
            Err(UserDirectoryError::UserAlreadyExists) => Ok(Decision::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }
}
