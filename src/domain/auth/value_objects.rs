use serde::Deserialize;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::ValidationError;

// ============================================================================
// Username Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
  pub const MAX_LENGTH: usize = 64;

  /// Creates a new Username after validation
  ///
  /// The value is kept verbatim. Leading or trailing whitespace is rejected
  /// rather than trimmed so two visually identical names never collide.
  /// Control characters (NUL included) are rejected; text columns cannot hold NUL.
  pub fn new(username: impl Into<String>) -> Result<Self, ValidationError> {
    let username = username.into();

    if username.is_empty() {
      return Err(ValidationError::MissingField {
        field: "username".to_string(),
      });
    }

    if username.chars().count() > Self::MAX_LENGTH {
      return Err(ValidationError::UsernameTooLong {
        max: Self::MAX_LENGTH,
      });
    }

    if username.trim() != username || username.chars().any(char::is_control) {
      return Err(ValidationError::InvalidField {
        field: "username".to_string(),
      });
    }

    Ok(Self(username))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Username {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl AsRef<str> for Username {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
  pub const MAX_LENGTH: usize = 254;

  /// Creates a new Email. The address is stored as provided; only presence
  /// and length are checked.
  pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
    let email = email.into();

    if email.is_empty() {
      return Err(ValidationError::MissingField {
        field: "email".to_string(),
      });
    }

    if email.len() > Self::MAX_LENGTH {
      return Err(ValidationError::InvalidEmail);
    }

    Ok(Self(email))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

/// Length bounds applied to plaintext passwords, in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
  pub min_length: usize,
  pub max_length: usize,
}

impl PasswordPolicy {
  pub const DEFAULT_MIN_LENGTH: usize = 1;
  pub const DEFAULT_MAX_LENGTH: usize = 1024;
}

impl Default for PasswordPolicy {
  fn default() -> Self {
    Self {
      min_length: Self::DEFAULT_MIN_LENGTH,
      max_length: Self::DEFAULT_MAX_LENGTH,
    }
  }
}

/// Plaintext password. The buffer is wiped when the value is dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
  /// Creates a new Password after checking it against the policy
  pub fn new(password: impl Into<String>, policy: &PasswordPolicy) -> Result<Self, ValidationError> {
    let password = Self(password.into());
    let len = password.0.len();

    if len == 0 || len < policy.min_length {
      return Err(ValidationError::PasswordTooShort {
        min: policy.min_length.max(1),
      });
    }

    if len > policy.max_length {
      return Err(ValidationError::PasswordTooLong {
        max: policy.max_length,
      });
    }

    Ok(password)
  }

  /// Returns the raw password bytes (use with caution)
  pub fn as_bytes(&self) -> &[u8] {
    self.0.as_bytes()
  }
}

impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

impl fmt::Display for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// Salt Value Object
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct Salt(Vec<u8>);

impl Salt {
  pub fn from_bytes(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn into_inner(self) -> Vec<u8> {
    self.0
  }
}

impl fmt::Debug for Salt {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Salt({} bytes)", self.0.len())
  }
}

// ============================================================================
// PasswordHash Value Object (raw Argon2id output)
// ============================================================================

#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(Vec<u8>);

impl PasswordHash {
  pub fn from_bytes(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn into_inner(self) -> Vec<u8> {
    self.0
  }
}

impl fmt::Debug for PasswordHash {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "PasswordHash({} bytes)", self.0.len())
  }
}

// ============================================================================
// Hashing Parameters
// ============================================================================

/// Argon2id cost parameters. Fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HashingParams {
  /// Number of passes over memory
  pub time_cost: u32,
  /// Memory cost in KiB
  pub memory_cost_kib: u32,
  /// Degree of parallelism (lanes)
  pub parallelism: u32,
  /// Derived key length in bytes
  pub output_len: usize,
  /// Salt length in bytes
  pub salt_len: usize,
}

impl HashingParams {
  pub const DEFAULT: HashingParams = HashingParams {
    time_cost: 3,
    memory_cost_kib: 64 * 1024,
    parallelism: 4,
    output_len: 32,
    salt_len: 16,
  };
}

impl Default for HashingParams {
  fn default() -> Self {
    Self::DEFAULT
  }
}
