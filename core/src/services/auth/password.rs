//! bcrypt password hashing.
//!
//! bcrypt is CPU-bound, so every hash and verify runs on the blocking pool.

use std::sync::{Arc, OnceLock};

use crate::errors::{DomainError, DomainResult};

/// bcrypt ignores everything past this many bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Rejection for passwords bcrypt would truncate
pub const PASSWORD_TOO_LONG: &str = "Password must be at most 72 bytes";

/// Plaintext hashed once to produce the hash checked for unknown usernames
const DUMMY_PASSWORD: &str = "scribe-dummy-password";

/// Hashes and verifies passwords with a fixed bcrypt cost
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<OnceLock<String>>,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            dummy_hash: Arc::new(OnceLock::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Whether bcrypt would see the whole password
    pub fn accepts(password: &str) -> bool {
        password.len() <= MAX_PASSWORD_BYTES
    }

    /// Hash a password with a fresh random salt
    pub async fn hash(&self, password: &str) -> DomainResult<String> {
        if !Self::accepts(password) {
            return Err(DomainError::validation(PASSWORD_TOO_LONG));
        }
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Check a password against a stored hash
    pub async fn verify(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::internal(format!("Password verification task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))
    }

    /// Spend the same work as a real verification and discard the result.
    ///
    /// Used when the username does not exist so that the response time does
    /// not reveal which half of the credentials was wrong.
    pub async fn dummy_verify(&self, password: &str) -> DomainResult<()> {
        let hash = match self.dummy_hash.get() {
            Some(hash) => hash.clone(),
            None => {
                let hash = self.hash(DUMMY_PASSWORD).await?;
                // A concurrent caller may have won; either hash works
                let _ = self.dummy_hash.set(hash.clone());
                hash
            }
        };

        self.verify(password, &hash).await?;
        Ok(())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
