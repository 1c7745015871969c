//! Token service for JWT generation and verification.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::config::TokenServiceConfig;
use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Service for issuing and verifying signed bearer tokens
///
/// The signing secret is fixed at construction; there is no rotation and no
/// global lookup, so services built with different secrets never accept each
/// other's tokens.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration, including the signing secret
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // Expiry is checked against an explicit clock in `verify_at`
        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Token lifetime in days
    pub fn expiry_days(&self) -> i64 {
        self.config.expiry_days
    }

    /// Issues a token for `user_id` valid from now
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token for `user_id` as if the current time were `now`
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded JWT, expiring `expiry_days` after `now`
    /// * `Err(TokenError::GenerationFailed)` - Encoding failed, or the
    ///   configured lifetime does not fit in a timestamp
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String, TokenError> {
        let lifetime = Duration::try_days(self.config.expiry_days)
            .filter(|lifetime| now.checked_add_signed(*lifetime).is_some())
            .ok_or_else(|| {
                tracing::error!(days = self.config.expiry_days, "Token lifetime out of range");
                TokenError::GenerationFailed
            })?;
        let claims = Claims::new(user_id, self.config.issuer.clone(), now, lifetime);
        self.encode_jwt(&claims)
    }

    /// Verifies a token and returns the subject user id
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token against the clock value `now`
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The subject embedded at issuance
    /// * `Err(TokenError::InvalidSignature)` - Not signed with this service's secret
    /// * `Err(TokenError::Expired)` - `now` is at or past the expiry
    /// * `Err(TokenError::Malformed)` - Anything else wrong with the token
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }

        claims.user_id().map_err(|_| TokenError::Malformed)
    }

    /// Encodes claims into a JWT token
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {}", e);
            TokenError::GenerationFailed
        })
    }
}
