pub mod credentials;
pub mod decision;
pub mod email;
pub mod password;
pub mod user_account;
