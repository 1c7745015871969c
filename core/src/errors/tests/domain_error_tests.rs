//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_token_error_converts_into_domain_error() {
    let error: DomainError = TokenError::Expired.into();
    assert!(matches!(error, DomainError::Token(TokenError::Expired)));
    assert!(error.is_authentication_failure());
}

#[test]
fn test_auth_error_is_transparent() {
    let error: DomainError = AuthError::InvalidCredentials.into();
    assert_eq!(error.to_string(), "Invalid credentials");
}

#[test]
fn test_constructors() {
    assert!(matches!(
        DomainError::not_found("Post"),
        DomainError::NotFound { resource } if resource == "Post"
    ));
    assert!(!DomainError::validation("empty").is_authentication_failure());
    assert_eq!(
        DomainError::forbidden("not the author").to_string(),
        "Forbidden: not the author"
    );
}
