//! Axum-specific registration route.

use axum::{Form, Json, extract::State, http::StatusCode, response::IntoResponse};
use photokeep_application::RegisterUseCase;
use photokeep_core::{Credentials, Decision, Email, Password, UserDirectory};
use secrecy::Secret;
use serde::Deserialize;

use crate::routes::error::AuthApiError;

/// Axum-specific request body for registration
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// User's email address
    pub email: Secret<String>,

    /// User's password
    pub password: Secret<String>,
}

/// Axum registration route.
///
/// Any validation failure is surfaced as the single "Invalid user details"
/// message the original form shows; only well-formed submissions reach the
/// directory.
#[tracing::instrument(name = "Register", skip(directory, request))]
pub async fn register<D>(
    State(directory): State<D>,
    Form(request): Form<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    D: UserDirectory + Clone + 'static,
{
    let Ok(email) = Email::try_from(request.email) else {
        return Err(AuthApiError::from_decision(Decision::ValidationError));
    };
    let Ok(password) = Password::try_from(request.password) else {
        return Err(AuthApiError::from_decision(Decision::ValidationError));
    };

    let decision = RegisterUseCase::new(&directory)
        .execute(Credentials::new(email, password))
        .await?;

    match decision {
        Decision::Success => Ok((
            StatusCode::CREATED,
            Json(serde_json::json!({
                "status": "success",
                "message": "User created successfully"
            })),
        )),
        other => Err(AuthApiError::from_decision(other)),
    }
}
