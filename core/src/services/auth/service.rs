//! Main authentication service implementation

use std::sync::Arc;

use sb_shared::types::AuthCredentials;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::password::{PasswordHasher, PASSWORD_TOO_LONG};

/// Stand-in verified for overlong passwords to keep timing comparable
const DUMMY_OVERLONG_INPUT: &str = "overlong";

/// A user together with a freshly issued token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub token: String,
}

/// Authentication service for registration, login and identity lookup
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for credential persistence
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// bcrypt hasher
    hasher: PasswordHasher,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `config` - Service configuration
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }

    /// Register a new account and sign it in
    ///
    /// The username check and the insert are one atomic store operation, so
    /// there is no separate existence lookup here.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - The created user and a token for it
    /// * `Err(DomainError::Auth(AuthError::DuplicateUsername))` - Username taken
    /// * `Err(DomainError::Validation)` - Empty username or password, or a
    ///   password longer than bcrypt reads
    pub async fn register(&self, credentials: &AuthCredentials) -> DomainResult<AuthSession> {
        Self::require_credentials(credentials)?;

        let password_hash = self.hasher.hash(&credentials.password).await?;
        let user = User::new(credentials.username.clone(), password_hash);

        let user = self.user_repository.create(user).await.map_err(|e| {
            if matches!(e, DomainError::Auth(AuthError::DuplicateUsername)) {
                tracing::debug!(username = %credentials.username, "Registration rejected: username taken");
            }
            e
        })?;

        let token = self.token_service.issue(user.id)?;
        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthSession { user, token })
    }

    /// Check credentials and issue a token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Credentials matched
    /// * `Err(DomainError::Auth(AuthError::InvalidCredentials))` - Unknown
    ///   username or wrong password, indistinguishably
    pub async fn login(&self, credentials: &AuthCredentials) -> DomainResult<AuthSession> {
        // No stored hash can match: bcrypt would compare only a prefix
        if !PasswordHasher::accepts(&credentials.password) {
            self.hasher.dummy_verify(DUMMY_OVERLONG_INPUT).await?;
            tracing::debug!("Login failed: overlong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let user = self
            .user_repository
            .find_by_username(&credentials.username)
            .await?;

        let user = match user {
            Some(user) => user,
            None => {
                self.hasher.dummy_verify(&credentials.password).await?;
                tracing::debug!("Login failed");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self
            .hasher
            .verify(&credentials.password, &user.password_hash)
            .await?
        {
            tracing::debug!("Login failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue(user.id)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthSession { user, token })
    }

    /// Resolve an authenticated user id and re-issue a token with a fresh expiry
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Auth(AuthError::StaleIdentity))` - The token was
    ///   valid but the user no longer exists
    pub async fn me(&self, user_id: Uuid) -> DomainResult<AuthSession> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::StaleIdentity)?;

        let token = self.token_service.issue(user.id)?;
        Ok(AuthSession { user, token })
    }

    fn require_credentials(credentials: &AuthCredentials) -> DomainResult<()> {
        if credentials.username.trim().is_empty() {
            return Err(DomainError::validation("Username is required"));
        }
        if credentials.password.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }
        if !PasswordHasher::accepts(&credentials.password) {
            return Err(DomainError::validation(PASSWORD_TOO_LONG));
        }
        Ok(())
    }
}
