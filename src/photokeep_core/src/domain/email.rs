use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use crate::domain::user_account::UserError;

static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email format regex is valid")
});

/// A validated email address.
///
/// The inner value is wrapped in [`Secret`] so it never leaks through
/// `Debug` output or tracing spans. Equality and hashing expose the secret
/// internally so directories can key accounts by address.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl TryFrom<Secret<String>> for Email {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if EMAIL_FORMAT.is_match(value.expose_secret()) {
            Ok(Self(value))
        } else {
            Err(UserError::InvalidEmail)
        }
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn email(address: &str) -> Result<Email, UserError> {
        Email::try_from(Secret::from(address.to_string()))
    }

    #[test]
    fn valid_address_is_accepted() {
        assert!(email("a@b.com").is_ok());
    }

    #[test]
    fn empty_address_is_rejected() {
        assert_eq!(email("").unwrap_err(), UserError::InvalidEmail);
    }

    #[test]
    fn address_without_at_sign_is_rejected() {
        assert_eq!(email("ab.com").unwrap_err(), UserError::InvalidEmail);
    }

    #[test]
    fn address_without_domain_dot_is_rejected() {
        assert_eq!(email("a@bcom").unwrap_err(), UserError::InvalidEmail);
    }

    #[test]
    fn same_address_compares_equal() {
        assert_eq!(email("a@b.com").unwrap(), email("a@b.com").unwrap());
        assert_ne!(email("a@b.com").unwrap(), email("c@d.com").unwrap());
    }

    #[quickcheck]
    fn strings_without_at_sign_never_parse(s: String) -> bool {
        s.contains('@') || email(&s).is_err()
    }
}
