//! Axum HTTP surface for the photokeep login service.
//!
//! Routes extract form submissions, run the use cases and map the resulting
//! [`photokeep_core::Decision`] to redirects or JSON error bodies carrying
//! the service's user-visible messages.

pub mod routes;

pub use routes::{AuthApiError, ErrorResponse, login, register};

/// Redirect target after a successful login, the photo display page.
pub const PHOTO_DISPLAY_PATH: &str = "/photos/display";
