/// Outcome of an authentication or registration check.
///
/// Produced fresh per call and never persisted. `Success` is only ever
/// produced when an account exists for the submitted email and its stored
/// credential matches the submitted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Credentials verified, or registration accepted.
    Success,
    /// No account exists for the submitted email.
    UserNotFound,
    /// An account exists but the submitted password does not match.
    InvalidPassword,
    /// Registration rejected because the email is already taken.
    DuplicateEmail,
    /// Caller-level form validation failed before the directory was consulted.
    ValidationError,
}
