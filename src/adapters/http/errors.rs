use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::AuthError;

use super::dtos::{
  INVALID_REQUEST, NOT_IMPLEMENTED, StatusResponse, UNEXPECTED_ERROR, USERNAME_ALREADY_EXISTS,
};

/// API error type that maps domain errors to HTTP responses
#[derive(Debug)]
pub enum ApiError {
  /// Malformed payload or input policy violation (400 Bad Request)
  Validation(String),

  /// Username already taken (409 Conflict)
  UsernameAlreadyExists,

  /// Route exists but has no behaviour yet (501 Not Implemented)
  NotImplemented,

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::UsernameAlreadyExists => write!(f, "Username already exists"),
      ApiError::NotImplemented => write!(f, "Not implemented"),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::UsernameAlreadyExists => StatusCode::CONFLICT,
      ApiError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let code = match self {
      ApiError::Validation(msg) => {
        tracing::debug!("Rejected request: {}", msg);
        INVALID_REQUEST
      }
      ApiError::UsernameAlreadyExists => USERNAME_ALREADY_EXISTS,
      ApiError::NotImplemented => NOT_IMPLEMENTED,
      ApiError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        UNEXPECTED_ERROR
      }
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(StatusResponse::error(code))
  }
}

/// Convert AuthError to ApiError
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::UsernameAlreadyExists => ApiError::UsernameAlreadyExists,
      AuthError::Validation(err) => ApiError::Validation(err.to_string()),
      other @ (AuthError::Transient(_) | AuthError::Storage(_) | AuthError::Hash(_)) => {
        ApiError::Internal(other.to_string())
      }
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::errors::{HashError, RepositoryError, ValidationError};
  use actix_web::body::to_bytes;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::UsernameAlreadyExists.status_code(),
      StatusCode::CONFLICT
    );
    assert_eq!(
      ApiError::NotImplemented.status_code(),
      StatusCode::NOT_IMPLEMENTED
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_auth_error_conversion() {
    let api_error: ApiError = AuthError::UsernameAlreadyExists.into();
    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);

    let api_error: ApiError = AuthError::Validation(ValidationError::InvalidEmail).into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let api_error: ApiError = AuthError::Storage(RepositoryError::Timeout("x".to_string())).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let api_error: ApiError = AuthError::Transient(HashError::Entropy("x".to_string())).into();
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
  }

  #[actix_web::test]
  async fn test_internal_error_does_not_leak_cause() {
    let response = ApiError::Internal("password authentication failed for user".to_string())
      .error_response();

    let body = to_bytes(response.into_body()).await.unwrap();
    let parsed: StatusResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(parsed, StatusResponse::error(UNEXPECTED_ERROR));
  }
}
