use secrecy::{ExposeSecret, Secret};

use crate::domain::user_account::UserError;

/// A submitted or stored password.
///
/// The only caller-level constraint is that the field is non-empty; any
/// further policy belongs to the directory implementation.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            Err(UserError::EmptyPassword)
        } else {
            Ok(Self(value))
        }
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Password {}
