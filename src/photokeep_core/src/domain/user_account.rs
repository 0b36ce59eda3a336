use thiserror::Error;

use crate::domain::{email::Email, password::Password};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

/// An account record as held by the user directory.
///
/// The stored credential is compared by exact equality; a hashing scheme,
/// if any, lives behind the directory boundary and is invisible here.
#[derive(Debug, Clone)]
pub struct UserAccount {
    email: Email,
    password: Password,
}

impl UserAccount {
    pub fn new(email: Email, password: Password) -> Self {
        Self { email, password }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_matches(&self, candidate: &Password) -> bool {
        self.password == *candidate
    }
}
