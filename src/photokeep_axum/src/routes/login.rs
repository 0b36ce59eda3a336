//! Axum-specific login route.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use photokeep_application::LoginUseCase;
use photokeep_core::{Credentials, Decision, Email, Password, UserDirectory};
use secrecy::Secret;
use serde::Deserialize;

use crate::{PHOTO_DISPLAY_PATH, routes::error::AuthApiError};

/// Axum-specific request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// User's email address
    pub email: Secret<String>,

    /// User's password
    pub password: Secret<String>,
}

/// Axum login route.
///
/// Parses the submitted credentials, runs the login use case and redirects
/// to the photo display page on success. Validation failures short-circuit
/// before the directory is consulted.
#[tracing::instrument(name = "Login", skip(directory, request))]
pub async fn login<D>(
    State(directory): State<D>,
    Form(request): Form<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    D: UserDirectory + Clone + 'static,
{
    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let decision = LoginUseCase::new(&directory)
        .execute(Credentials::new(email, password))
        .await?;

    match decision {
        Decision::Success => Ok(Redirect::to(PHOTO_DISPLAY_PATH)),
        other => Err(AuthApiError::from_decision(other)),
    }
}
