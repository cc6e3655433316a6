use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::auth::{
  context::RequestContext,
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserGateway,
};

/// In-memory user gateway for development and tests
///
/// Keyed by username, so it enforces the same uniqueness rule as the
/// `users_pkey` constraint. Can be told to fail every write to exercise
/// storage-error paths.
#[derive(Default)]
pub struct InMemoryUserGateway {
  users: Mutex<HashMap<String, User>>,
  closed: AtomicBool,
  unavailable: AtomicBool,
}

impl InMemoryUserGateway {
  pub fn new() -> Self {
    Self::default()
  }

  /// Makes every subsequent write fail with a connection error
  pub fn set_unavailable(&self, unavailable: bool) {
    self.unavailable.store(unavailable, Ordering::SeqCst);
  }

  pub fn find(&self, username: &str) -> Option<User> {
    self
      .users
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .get(username)
      .cloned()
  }

  pub fn len(&self) -> usize {
    self
      .users
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn is_closed(&self) -> bool {
    self.closed.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl UserGateway for InMemoryUserGateway {
  async fn add_user(&self, ctx: &RequestContext, user: User) -> Result<(), AuthError> {
    assert!(!self.is_closed(), "add_user called after close");

    if ctx.is_expired() {
      return Err(RepositoryError::Timeout("adding user: deadline already passed".to_string()).into());
    }

    if self.unavailable.load(Ordering::SeqCst) {
      return Err(RepositoryError::ConnectionFailed("adding user: store unavailable".to_string()).into());
    }

    let mut users = self
      .users
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner());

    if users.contains_key(&user.username) {
      return Err(AuthError::UsernameAlreadyExists);
    }

    users.insert(user.username.clone(), user);
    Ok(())
  }

  async fn close(&self) {
    self.closed.store(true, Ordering::SeqCst);
  }
}
