use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use photokeep_application::{LoginError, RegisterError};
use photokeep_core::{Decision, UserError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// API-level errors with the exact user-visible message strings, including
/// the long-standing "adress" misspelling the UI depends on.
#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("User was not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("This email adress is already registered")]
    EmailAlreadyRegistered,

    #[error("Invalid user details")]
    InvalidUserDetails,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl AuthApiError {
    /// Maps the non-success decisions to their user-visible errors.
    pub fn from_decision(decision: Decision) -> Self {
        match decision {
            Decision::UserNotFound => Self::UserNotFound,
            Decision::InvalidPassword => Self::InvalidPassword,
            Decision::DuplicateEmail => Self::EmailAlreadyRegistered,
            Decision::ValidationError => Self::InvalidUserDetails,
            Decision::Success => Self::UnexpectedError("success is not an error".to_string()),
        }
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::InvalidUserDetails | AuthApiError::InvalidInput(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }

            AuthApiError::EmailAlreadyRegistered => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::UserNotFound | AuthApiError::InvalidPassword => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }

            AuthApiError::UnexpectedError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserDirectoryError(e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::UserDirectoryError(e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}
