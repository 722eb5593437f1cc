//! Authentication ports: password hashing and server-side sessions.

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::RepoError;

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Storage for login sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, session: Session) -> Result<Session, RepoError>;

    /// Load a session that has not expired yet.
    async fn load(&self, id: &str) -> Result<Option<Session>, RepoError>;

    /// Remove a session. Removing an unknown id is not an error.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;

    /// Remove every expired session, returning how many went.
    async fn delete_expired(&self) -> Result<u64, RepoError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is disabled")]
    Inactive,

    #[error("Authentication credentials were not provided")]
    MissingSession,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
