use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apollo::{
  adapters::http::{RequestIdMiddleware, configure_user_routes},
  application::auth::RegisterUserUseCase,
  domain::auth::{ports::UserGateway, services::UserService},
  infrastructure::{
    config::Config, persistence::postgres::PostgresUserGateway,
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "apollo=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Apollo user service");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!(
    "Connecting to database (max {} connections)",
    config.database.max_connections
  );

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    anyhow::anyhow!(
      "Database connection timed out after {} seconds",
      config.database.connect_timeout_seconds
    )
  })?
  .context("Failed to connect to database")?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  // The gateway takes sole ownership of the pool from here on
  let gateway = Arc::new(PostgresUserGateway::new(db_pool));

  let password_hasher =
    Arc::new(Argon2PasswordHasher::new(config.hashing).context("Invalid hashing parameters")?);
  tracing::info!(
    time_cost = config.hashing.time_cost,
    memory_cost_kib = config.hashing.memory_cost_kib,
    parallelism = config.hashing.parallelism,
    "Password hasher initialized"
  );

  let user_service = Arc::new(UserService::new(gateway.clone(), password_hasher));
  let register_use_case = Arc::new(RegisterUserUseCase::new(
    user_service,
    config.security.password_policy(),
  ));

  let request_timeout = Duration::from_secs(config.server.request_timeout_seconds);
  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(RequestIdMiddleware::new())
      .wrap(Logger::default())
      .service(web::scope("/api/v1/users").configure(|cfg| {
        configure_user_routes(cfg, register_use_case.clone(), request_timeout)
      }))
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))
  .with_context(|| format!("Failed to bind {}:{}", server_host, server_port))?
  .run()
  .await
  .context("HTTP server failed")?;

  tracing::info!("HTTP server stopped");
  gateway.close().await;

  Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
