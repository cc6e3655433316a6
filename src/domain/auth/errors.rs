use thiserror::Error;

/// Main registration error type
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Username already exists")]
  UsernameAlreadyExists,

  /// Entropy source failure while generating a salt. The whole registration
  /// attempt may be retried by the caller.
  #[error("Transient error: {0}")]
  Transient(HashError),

  #[error("Storage error: {0}")]
  Storage(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(HashError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

impl AuthError {
  /// Whether the error is an expected business condition rather than a fault
  pub fn is_conflict(&self) -> bool {
    matches!(self, AuthError::UsernameAlreadyExists)
  }
}

impl From<HashError> for AuthError {
  fn from(error: HashError) -> Self {
    match error {
      HashError::Entropy(_) => AuthError::Transient(error),
      _ => AuthError::Hash(error),
    }
  }
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Operation timed out: {0}")]
  Timeout(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

impl RepositoryError {
  /// Prefixes the message with the name of the failing operation
  pub fn context(self, operation: &str) -> Self {
    match self {
      RepositoryError::ConnectionFailed(msg) => {
        RepositoryError::ConnectionFailed(format!("{}: {}", operation, msg))
      }
      RepositoryError::QueryFailed(msg) => {
        RepositoryError::QueryFailed(format!("{}: {}", operation, msg))
      }
      RepositoryError::Timeout(msg) => RepositoryError::Timeout(format!("{}: {}", operation, msg)),
      RepositoryError::DatabaseError(msg) => {
        RepositoryError::DatabaseError(format!("{}: {}", operation, msg))
      }
    }
  }
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Entropy source unavailable: {0}")]
  Entropy(String),

  #[error("Invalid hashing parameters: {0}")]
  InvalidParams(String),

  #[error("Failed to hash password: {0}")]
  HashingFailed(String),
}

/// Input validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
  #[error("Email must be at most 254 characters")]
  InvalidEmail,

  #[error("Username too long, maximum {max} characters allowed")]
  UsernameTooLong { max: usize },

  #[error("Password too short, minimum {min} characters required")]
  PasswordTooShort { min: usize },

  #[error("Password too long, maximum {max} characters allowed")]
  PasswordTooLong { max: usize },

  #[error("Invalid field: {field}")]
  InvalidField { field: String },

  #[error("Missing required field: {field}")]
  MissingField { field: String },
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::Database(db_err) => RepositoryError::DatabaseError(db_err.message().to_string()),
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      sqlx::Error::Io(e) => RepositoryError::ConnectionFailed(e.to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}
