use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

/// Request-scoped context handed down from the HTTP layer
///
/// Carries the deadline every storage call must respect and, when available,
/// the request id used to correlate log lines.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
  deadline: Instant,
  request_id: Option<Uuid>,
}

impl RequestContext {
  /// Creates a context that expires `timeout` from now
  pub fn with_timeout(timeout: Duration) -> Self {
    Self {
      deadline: Instant::now() + timeout,
      request_id: None,
    }
  }

  /// Creates a context with an absolute deadline
  pub fn with_deadline(deadline: Instant) -> Self {
    Self {
      deadline,
      request_id: None,
    }
  }

  pub fn request_id(mut self, request_id: Uuid) -> Self {
    self.request_id = Some(request_id);
    self
  }

  pub fn deadline(&self) -> Instant {
    self.deadline
  }

  pub fn id(&self) -> Option<Uuid> {
    self.request_id
  }

  pub fn is_expired(&self) -> bool {
    Instant::now() >= self.deadline
  }

  /// Time left before the deadline, zero once it has passed
  pub fn remaining(&self) -> Duration {
    self.deadline.saturating_duration_since(Instant::now())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_context_expiry() {
    let ctx = RequestContext::with_timeout(Duration::from_secs(60));
    assert!(!ctx.is_expired());

    let expired = RequestContext::with_deadline(Instant::now() - Duration::from_millis(1));
    assert!(expired.is_expired());
    assert_eq!(expired.remaining(), Duration::ZERO);
  }

  #[test]
  fn test_context_remaining() {
    let ctx = RequestContext::with_timeout(Duration::from_secs(5));
    let remaining = ctx.remaining();

    assert!(remaining <= Duration::from_secs(5));
    assert!(remaining > Duration::from_secs(4));
  }

  #[test]
  fn test_context_request_id() {
    let id = Uuid::new_v4();
    let ctx = RequestContext::with_timeout(Duration::from_secs(1)).request_id(id);
    assert_eq!(ctx.id(), Some(id));
  }
}
