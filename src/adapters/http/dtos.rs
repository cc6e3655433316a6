use serde::{Deserialize, Serialize};
use validator::Validate;

/// Success code returned after a user is created
pub const USER_CREATED: &str = "User created";
/// Error code returned when the username is taken
pub const USERNAME_ALREADY_EXISTS: &str = "Username already exists";
/// Error code returned for malformed or invalid input
pub const INVALID_REQUEST: &str = "Invalid request";
/// Error code returned for routes that exist but do nothing yet
pub const NOT_IMPLEMENTED: &str = "Not implemented";
/// Error code returned for every unexpected failure
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Request for user registration
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
  /// Unique user name
  #[validate(length(
    min = 1,
    max = 64,
    message = "Username must be between 1 and 64 characters"
  ))]
  pub username: String,

  /// User's email address
  #[validate(length(
    min = 1,
    max = 254,
    message = "Email must be between 1 and 254 characters"
  ))]
  pub email: String,

  /// User's password
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RegisterRequest")
      .field("username", &self.username)
      .field("email", &self.email)
      .finish_non_exhaustive()
  }
}

/// Response envelope shared by every users endpoint
///
/// Exactly one of the two fields is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub success: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl StatusResponse {
  pub fn success(code: &str) -> Self {
    Self {
      success: Some(code.to_string()),
      error: None,
    }
  }

  pub fn error(code: &str) -> Self {
    Self {
      success: None,
      error: Some(code.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_register_request_validation_valid() {
    let request = RegisterRequest {
      username: "alice".to_string(),
      email: "alice@x.com".to_string(),
      password: "pw1".to_string(),
    };

    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_register_request_validation_invalid() {
    let request = RegisterRequest {
      username: "".to_string(),
      email: "".to_string(),
      password: "".to_string(),
    };

    let errors = request.validate().unwrap_err();
    let fields = errors.field_errors();
    assert!(fields.contains_key("username"));
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("password"));
  }

  #[test]
  fn test_register_request_debug_hides_password() {
    let request = RegisterRequest {
      username: "alice".to_string(),
      email: "alice@x.com".to_string(),
      password: "secret-pw".to_string(),
    };

    assert!(!format!("{:?}", request).contains("secret-pw"));
  }

  #[test]
  fn test_status_response_serialization() {
    let json = serde_json::to_value(StatusResponse::success(USER_CREATED)).unwrap();
    assert_eq!(json, serde_json::json!({ "success": "User created" }));

    let json = serde_json::to_value(StatusResponse::error(USERNAME_ALREADY_EXISTS)).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Username already exists" }));
  }
}
