pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    credentials::Credentials,
    decision::Decision,
    email::Email,
    password::Password,
    user_account::{UserAccount, UserError},
};

pub use ports::user_directory::{UserDirectory, UserDirectoryError};
