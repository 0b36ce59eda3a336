//! Axum-specific route handlers.
//!
//! These routes are Axum-specific - they use Axum's extractors to get data
//! from requests, call the use cases, and convert decisions to responses.

pub mod error;
pub mod login;
pub mod register;

pub use error::{AuthApiError, ErrorResponse};
pub use login::login;
pub use register::register;
