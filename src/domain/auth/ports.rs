use async_trait::async_trait;

use super::context::RequestContext;
use super::entities::User;
use super::errors::{AuthError, HashError};
use super::value_objects::{Password, PasswordHash, Salt};

/// Gateway trait for user persistence operations
///
/// Implementations own their storage connections. They must be safe to share
/// between concurrent callers without external locking.
#[async_trait]
pub trait UserGateway: Send + Sync {
  /// Inserts a new user
  ///
  /// Returns `AuthError::UsernameAlreadyExists` when the username is taken and
  /// `AuthError::Storage` for every other failure, including an expired
  /// request deadline.
  async fn add_user(&self, ctx: &RequestContext, user: User) -> Result<(), AuthError>;

  /// Releases every underlying connection. Must be called exactly once, at
  /// shutdown; no write may follow it.
  async fn close(&self);
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Draws a fresh salt from a cryptographically secure source
  fn generate_salt(&self) -> Result<Salt, HashError>;

  /// Derives the password hash for the given salt
  async fn hash(&self, password: &Password, salt: &Salt) -> Result<PasswordHash, HashError>;
}
