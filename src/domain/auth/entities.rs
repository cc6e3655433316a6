use super::value_objects::{Email, PasswordHash, Salt, Username};

/// User entity as persisted in the `users` table
///
/// A record only ever exists with both the derived hash and the salt that
/// produced it; the plaintext password is never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  /// Unique identifier, enforced by the store's primary key
  pub username: String,
  /// Contact address, stored exactly as provided
  pub email: String,
  /// Argon2id output
  pub password_hash: Vec<u8>,
  /// Random per-user salt that was mixed into `password_hash`
  pub salt: Vec<u8>,
}

impl User {
  /// Creates a new user from validated parts
  pub fn new(username: Username, email: Email, password_hash: PasswordHash, salt: Salt) -> Self {
    Self {
      username: username.into_inner(),
      email: email.into_inner(),
      password_hash: password_hash.into_inner(),
      salt: salt.into_inner(),
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(username: String, email: String, password_hash: Vec<u8>, salt: Vec<u8>) -> Self {
    Self {
      username,
      email,
      password_hash,
      salt,
    }
  }
}
