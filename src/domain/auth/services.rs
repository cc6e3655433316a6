use std::sync::Arc;

use super::context::RequestContext;
use super::entities::User;
use super::errors::AuthError;
use super::ports::{PasswordHasher, UserGateway};
use super::value_objects::{Email, Password, Username};

/// User service implementing credential hashing and registration
///
/// Holds no per-call state; every `create_user` call is independent and the
/// store alone decides username uniqueness.
pub struct UserService {
  gateway: Arc<dyn UserGateway>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
  /// Creates a new instance of UserService
  pub fn new(gateway: Arc<dyn UserGateway>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
    Self {
      gateway,
      password_hasher,
    }
  }

  /// Registers a new user
  ///
  /// # Arguments
  /// * `ctx` - Request context whose deadline bounds the storage write
  /// * `username` - The unique user name
  /// * `email` - The user's email address, stored as provided
  /// * `password` - The plaintext password; consumed and wiped after hashing
  ///
  /// # Errors
  /// * `AuthError::Transient` if no salt could be drawn
  /// * `AuthError::Hash` if key derivation fails
  /// * `AuthError::UsernameAlreadyExists` if the store already holds the username
  /// * `AuthError::Storage` for any other persistence failure
  pub async fn create_user(
    &self,
    ctx: &RequestContext,
    username: Username,
    email: Email,
    password: Password,
  ) -> Result<(), AuthError> {
    let salt = self.password_hasher.generate_salt()?;

    let password_hash = self.password_hasher.hash(&password, &salt).await?;
    drop(password);

    let user = User::new(username, email, password_hash, salt);

    self.gateway.add_user(ctx, user).await
  }
}
