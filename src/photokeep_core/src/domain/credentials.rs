use crate::domain::{email::Email, password::Password};

/// The email/password pair submitted by a caller.
///
/// Ephemeral and owned by the request; never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: Email,
    password: Password,
}

impl Credentials {
    pub fn new(email: Email, password: Password) -> Self {
        Self { email, password }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn into_parts(self) -> (Email, Password) {
        (self.email, self.password)
    }
}
