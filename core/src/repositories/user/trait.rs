//! User repository trait defining the interface for credential persistence.
//!
//! This is the credential store consumed by the authentication flow. The
//! trait is async-first and uses Result types for proper error handling.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations must make [`UserRepository::create`] an atomic
/// insert-if-absent keyed on the username, so that two concurrent
/// registrations of the same name cannot both succeed.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use sb_core::repositories::UserRepository;
/// use sb_core::domain::entities::user::User;
/// use sb_core::errors::DomainError;
///
/// struct PgUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PgUserRepository {
///     async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn push_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DomainError> { Ok(()) }
/// #   async fn pull_post(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, DomainError> { Ok(false) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their exact, case-sensitive username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Insert a new user unless the username is taken
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Auth(AuthError::DuplicateUsername))` - Username already exists
    /// * `Err(DomainError)` - Any other storage failure
    ///
    /// # Example
    /// ```no_run
    /// # use sb_core::repositories::UserRepository;
    /// # use sb_core::domain::entities::user::User;
    /// # use sb_core::errors::{AuthError, DomainError};
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user = User::new("alice".to_string(), "$2b$10$...".to_string());
    ///
    /// match repo.create(user).await {
    ///     Ok(created) => println!("Created user {}", created.id),
    ///     Err(DomainError::Auth(AuthError::DuplicateUsername)) => println!("Name taken"),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Append a post to the user's ordered ownership list
    ///
    /// # Returns
    /// * `Ok(())` - Recorded (a repeated id is ignored)
    /// * `Err(DomainError::NotFound)` - No such user
    async fn push_post(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DomainError>;

    /// Remove a post from the user's ownership list
    ///
    /// # Returns
    /// * `Ok(true)` - The post was listed and has been removed
    /// * `Ok(false)` - The post was not listed
    async fn pull_post(&self, user_id: Uuid, post_id: Uuid) -> Result<bool, DomainError>;
}
