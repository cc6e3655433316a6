use std::sync::Arc;

use crate::domain::auth::context::RequestContext;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::UserService;
use crate::domain::auth::value_objects::{Email, Password, PasswordPolicy, Username};

/// Command for registering a new user
#[derive(Clone)]
pub struct RegisterUserCommand {
  /// Unique user name
  pub username: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
}

impl std::fmt::Debug for RegisterUserCommand {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("RegisterUserCommand")
      .field("username", &self.username)
      .field("email", &self.email)
      .field("password", &"***")
      .finish()
  }
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  user_service: Arc<UserService>,
  password_policy: PasswordPolicy,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(user_service: Arc<UserService>, password_policy: PasswordPolicy) -> Self {
    Self {
      user_service,
      password_policy,
    }
  }

  /// Executes the user registration use case
  ///
  /// # Errors
  /// Returns `AuthError::Validation` for input that breaks the length policy,
  /// otherwise whatever `UserService::create_user` reports.
  pub async fn execute(
    &self,
    ctx: &RequestContext,
    command: RegisterUserCommand,
  ) -> Result<(), AuthError> {
    let username = Username::new(command.username)?;
    let email = Email::new(command.email)?;
    let password = Password::new(command.password, &self.password_policy)?;

    let username_for_log = username.as_str().to_owned();

    match self
      .user_service
      .create_user(ctx, username, email, password)
      .await
    {
      Ok(()) => {
        tracing::info!(request_id = ?ctx.id(), username = %username_for_log, "User registered");
        Ok(())
      }
      Err(AuthError::UsernameAlreadyExists) => {
        tracing::info!(
          request_id = ?ctx.id(),
          username = %username_for_log,
          "Registration rejected, username taken"
        );
        Err(AuthError::UsernameAlreadyExists)
      }
      Err(e) => Err(e),
    }
  }
}
