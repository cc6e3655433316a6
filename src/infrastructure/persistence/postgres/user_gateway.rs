use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::auth::{
  context::RequestContext,
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserGateway,
};

/// Name of the primary-key constraint on `users.username`
const USERNAME_CONSTRAINT: &str = "users_pkey";

/// SQLSTATE raised when `statement_timeout` cancels a statement
const QUERY_CANCELED: &str = "57014";

/// PostgreSQL implementation of the UserGateway trait
///
/// The pool is private; nothing above this type can reach it.
pub struct PostgresUserGateway {
  pool: PgPool,
}

impl PostgresUserGateway {
  /// Creates a new instance of PostgresUserGateway
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserGateway for PostgresUserGateway {
  async fn add_user(&self, ctx: &RequestContext, user: User) -> Result<(), AuthError> {
    debug_assert!(!self.pool.is_closed(), "add_user called after close");

    if ctx.is_expired() {
      return Err(RepositoryError::Timeout("adding user: deadline already passed".to_string()).into());
    }

    // Dropping an uncommitted transaction rolls it back; statement_timeout
    // stops the INSERT on the server once the deadline passes.
    let statement_timeout_ms = ctx.remaining().as_millis().max(1);
    let write = async {
      let mut tx = self.pool.begin().await?;

      sqlx::query("SELECT set_config('statement_timeout', $1, true)")
        .bind(statement_timeout_ms.to_string())
        .execute(&mut *tx)
        .await?;

      sqlx::query(
        r#"
            INSERT INTO users (username, email, password_hash, salt)
            VALUES ($1, $2, $3, $4)
            "#,
      )
      .bind(&user.username)
      .bind(&user.email)
      .bind(&user.password_hash)
      .bind(&user.salt)
      .execute(&mut *tx)
      .await?;

      tx.commit().await
    };

    let result = tokio::time::timeout_at(ctx.deadline(), write)
      .await
      .map_err(|_| {
        tracing::warn!(
          request_id = ?ctx.id(),
          username = %user.username,
          "Insert aborted by request deadline"
        );
        RepositoryError::Timeout("adding user: deadline exceeded".to_string())
      })?;

    match result {
      Ok(()) => Ok(()),
      Err(sqlx::Error::Database(db_err))
        if db_err.is_unique_violation() && db_err.constraint() == Some(USERNAME_CONSTRAINT) =>
      {
        Err(AuthError::UsernameAlreadyExists)
      }
      Err(sqlx::Error::Database(db_err))
        if db_err.code().as_deref() == Some(QUERY_CANCELED) =>
      {
        tracing::warn!(
          request_id = ?ctx.id(),
          username = %user.username,
          "Insert cancelled by statement timeout"
        );
        Err(RepositoryError::Timeout("adding user: statement timeout".to_string()).into())
      }
      Err(e) => Err(RepositoryError::from(e).context("adding user").into()),
    }
  }

  async fn close(&self) {
    tracing::info!("Closing database connection pool");
    self.pool.close().await;
  }
}
