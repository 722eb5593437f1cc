//! Error handling middleware - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use pixgram_core::error::{DomainError, RepoError};
use pixgram_core::ports::AuthError;
use pixgram_core::validation::FieldErrors;
use pixgram_shared::ErrorResponse;
use pixgram_shared::dto::AuthFailure;

pub const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";
pub const NOT_PERMITTED: &str = "You do not have permission to perform this action.";
pub const NOT_FOUND: &str = "Not found.";

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// No valid session accompanied the request.
    NotAuthenticated,
    Forbidden(String),
    Validation(FieldErrors),
    RegistrationFailed(FieldErrors),
    LoginFailed(FieldErrors),
    Internal(String),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound(NOT_FOUND.to_string())
    }

    pub fn invalid_credentials() -> Self {
        AppError::LoginFailed(FieldErrors::general("Invalid credentials"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotAuthenticated => write!(f, "Not authenticated"),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors),
            AppError::RegistrationFailed(errors) => write!(f, "Registration failed: {}", errors),
            AppError::LoginFailed(errors) => write!(f, "Login failed: {}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_)
            | AppError::Validation(_)
            | AppError::RegistrationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::NotAuthenticated | AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::LoginFailed(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        let error = match self {
            AppError::RegistrationFailed(errors) => {
                return response.json(AuthFailure {
                    error: "Registration failed".to_string(),
                    details: errors.clone().into_map(),
                });
            }
            AppError::LoginFailed(errors) => {
                return response.json(AuthFailure {
                    error: "Login failed".to_string(),
                    details: errors.clone().into_map(),
                });
            }
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::NotAuthenticated => ErrorResponse::forbidden(NOT_AUTHENTICATED),
            AppError::Forbidden(detail) => ErrorResponse::forbidden(detail),
            AppError::Validation(errors) => {
                ErrorResponse::bad_request("Invalid input.").with_errors(errors.clone().into_map())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        response.json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => AppError::Validation(errors),
        }
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::not_found(),
            RepoError::Constraint(msg) => {
                tracing::debug!("Constraint violation: {}", msg);
                AppError::Validation(FieldErrors::general(
                    "The request conflicts with an existing record.",
                ))
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => AppError::invalid_credentials(),
            AuthError::Inactive => {
                AppError::LoginFailed(FieldErrors::general("Account is disabled"))
            }
            AuthError::MissingSession => AppError::NotAuthenticated,
            AuthError::HashingError(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
