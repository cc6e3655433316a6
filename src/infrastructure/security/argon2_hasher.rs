use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::domain::auth::errors::HashError;
use crate::domain::auth::ports::PasswordHasher;
use crate::domain::auth::value_objects::{HashingParams, Password, PasswordHash, Salt};

/// Shortest salt argon2 accepts
const MIN_SALT_LEN: usize = 8;

/// Argon2id password hasher implementation
///
/// Produces raw derived bytes (not a PHC string); the salt is stored next to
/// the hash by the caller. Defaults:
/// - Memory cost: 64 MiB (65536 KiB)
/// - Time cost: 3 iterations
/// - Parallelism: 4 lanes
/// - Output length: 32 bytes
/// - Salt length: 16 bytes
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
  params: HashingParams,
}

impl Argon2PasswordHasher {
  /// Creates a new Argon2PasswordHasher with the specified parameters
  ///
  /// # Errors
  /// Returns `HashError::InvalidParams` if argon2 rejects the cost parameters
  /// or the salt length is too short.
  pub fn new(params: HashingParams) -> Result<Self, HashError> {
    if params.salt_len < MIN_SALT_LEN {
      return Err(HashError::InvalidParams(format!(
        "salt length must be at least {} bytes, got {}",
        MIN_SALT_LEN, params.salt_len
      )));
    }

    let argon2_params = Params::new(
      params.memory_cost_kib,
      params.time_cost,
      params.parallelism,
      Some(params.output_len),
    )
    .map_err(|e| HashError::InvalidParams(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    Ok(Self { argon2, params })
  }

  pub fn params(&self) -> &HashingParams {
    &self.params
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  /// Fills `salt_len` bytes from the operating system's CSPRNG
  fn generate_salt(&self) -> Result<Salt, HashError> {
    let mut salt = vec![0u8; self.params.salt_len];

    rand::rngs::OsRng
      .try_fill_bytes(&mut salt)
      .map_err(|e| HashError::Entropy(e.to_string()))?;

    Ok(Salt::from_bytes(salt))
  }

  /// Derives the hash on the blocking pool; the memory-hard work would
  /// otherwise stall the async worker for the whole computation.
  async fn hash(&self, password: &Password, salt: &Salt) -> Result<PasswordHash, HashError> {
    let argon2 = self.argon2.clone();
    let output_len = self.params.output_len;
    let password = Zeroizing::new(password.as_bytes().to_vec());
    let salt = salt.as_bytes().to_vec();

    tokio::task::spawn_blocking(move || {
      let mut output = vec![0u8; output_len];
      argon2
        .hash_password_into(&password, &salt, &mut output)
        .map_err(|e| HashError::HashingFailed(e.to_string()))?;
      Ok::<_, HashError>(PasswordHash::from_bytes(output))
    })
    .await
    .map_err(|e| HashError::HashingFailed(format!("hashing task failed: {}", e)))?
  }
}
