//! Conversion of domain errors into HTTP responses
//!
//! Every failure leaves the API as an [`ErrorResponse`] JSON body. Internal
//! details are logged here and never sent to the client.

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use sb_core::errors::{AuthError, DomainError, TokenError};
use sb_shared::errors::error_codes;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::middleware::auth::{ACCESS_DENIED, AUTHORIZATION_ERROR};

/// Message for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong. Try again later...";

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";

pub const DUPLICATE_USERNAME_MESSAGE: &str = "A user with this username already exists";

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::MissingToken => unauthorized(ACCESS_DENIED),
            AuthError::StaleIdentity => {
                log::warn!("Verified token refers to a user that no longer exists");
                unauthorized(AUTHORIZATION_ERROR)
            }
            AuthError::InvalidCredentials => {
                ErrorResponse::new(error_codes::INVALID_CREDENTIALS, INVALID_CREDENTIALS_MESSAGE)
                    .to_response(StatusCode::UNAUTHORIZED)
            }
            AuthError::DuplicateUsername => {
                ErrorResponse::new(error_codes::CONFLICT, DUPLICATE_USERNAME_MESSAGE)
                    .to_response(StatusCode::CONFLICT)
            }
        },
        DomainError::Token(TokenError::GenerationFailed) => {
            log::error!("Token generation failed");
            internal_error()
        }
        DomainError::Token(token_error) => {
            log::debug!("Token rejected: {}", token_error);
            unauthorized(AUTHORIZATION_ERROR)
        }
        DomainError::Validation { message } => {
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message)
                .to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::NotFound { resource } => {
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource))
                .to_response(StatusCode::NOT_FOUND)
        }
        DomainError::Forbidden { message } => {
            ErrorResponse::new(error_codes::FORBIDDEN, message).to_response(StatusCode::FORBIDDEN)
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error()
        }
    }
}

/// Turn `validator` failures into a 400 carrying the first field message
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field))
            })
        })
        .next()
        .unwrap_or_else(|| String::from("Invalid request data"));

    log::debug!("Request validation failed: {}", errors);

    ErrorResponse::new(error_codes::VALIDATION_ERROR, message).to_response(StatusCode::BAD_REQUEST)
}

/// Error handler for `web::Json` extraction failures
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &error {
        JsonPayloadError::ContentType => String::from("Expected a JSON body"),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            String::from("Request body is too large")
        }
        other => format!("Invalid JSON body: {}", other),
    };

    let response =
        ErrorResponse::new(error_codes::BAD_REQUEST, message).to_response(StatusCode::BAD_REQUEST);
    actix_web::error::InternalError::from_response(error, response).into()
}

fn unauthorized(message: &str) -> HttpResponse {
    ErrorResponse::new(error_codes::UNAUTHORIZED, message).to_response(StatusCode::UNAUTHORIZED)
}

fn internal_error() -> HttpResponse {
    ErrorResponse::new(error_codes::INTERNAL_ERROR, INTERNAL_ERROR_MESSAGE)
        .to_response(StatusCode::INTERNAL_SERVER_ERROR)
}
