use actix_web::web;
use std::sync::Arc;
use std::time::Duration;

use crate::application::auth::RegisterUserUseCase;

use super::handlers::users::{
  RequestTimeout, json_error_handler, not_implemented_handler, register_handler,
};

/// Configure user routes
///
/// Mounts all user endpoints under the provided scope (e.g. /api/v1/users).
///
/// # Routes
///
/// - POST /register - Register a new user account
/// - POST /login, /logout, /refresh - Not implemented (501)
/// - PUT /{id}, DELETE /{id} - Not implemented (501)
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// use std::time::Duration;
/// # use apollo::application::auth::RegisterUserUseCase;
/// # use apollo::adapters::http::routes::configure_user_routes;
///
/// # fn example(register_use_case: Arc<RegisterUserUseCase>) {
/// let app = App::new().service(web::scope("/api/v1/users").configure(|cfg| {
///   configure_user_routes(cfg, register_use_case, Duration::from_secs(10))
/// }));
/// # }
/// ```
pub fn configure_user_routes(
  cfg: &mut web::ServiceConfig,
  register_use_case: Arc<RegisterUserUseCase>,
  request_timeout: Duration,
) {
  cfg
    .app_data(web::Data::new(register_use_case))
    .app_data(web::Data::new(RequestTimeout(request_timeout)))
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/register", web::post().to(register_handler))
    .route("/login", web::post().to(not_implemented_handler))
    .route("/logout", web::post().to(not_implemented_handler))
    .route("/refresh", web::post().to(not_implemented_handler))
    .service(
      web::resource("/{id}")
        .route(web::put().to(not_implemented_handler))
        .route(web::delete().to(not_implemented_handler)),
    );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::http::dtos::StatusResponse;
  use crate::adapters::http::middleware::RequestIdMiddleware;
  use crate::domain::auth::services::UserService;
  use crate::domain::auth::value_objects::{HashingParams, PasswordPolicy};
  use crate::infrastructure::persistence::InMemoryUserGateway;
  use crate::infrastructure::security::Argon2PasswordHasher;
  use actix_web::{App, http::StatusCode, test};
  use serde_json::json;

  fn register_use_case(gateway: Arc<InMemoryUserGateway>) -> Arc<RegisterUserUseCase> {
    let hasher = Argon2PasswordHasher::new(HashingParams {
      time_cost: 1,
      memory_cost_kib: 1024,
      parallelism: 1,
      ..HashingParams::DEFAULT
    })
    .unwrap();
    let service = Arc::new(UserService::new(gateway, Arc::new(hasher)));
    Arc::new(RegisterUserUseCase::new(service, PasswordPolicy::default()))
  }

  macro_rules! init_app {
    ($gateway:expr) => {
      test::init_service(
        App::new().wrap(RequestIdMiddleware::new()).service(
          web::scope("/api/v1/users").configure(|cfg| {
            configure_user_routes(cfg, register_use_case($gateway), Duration::from_secs(5))
          }),
        ),
      )
      .await
    };
  }

  #[actix_web::test]
  async fn test_register_returns_created() {
    let gateway = Arc::new(InMemoryUserGateway::new());
    let app = init_app!(gateway.clone());

    let req = test::TestRequest::post()
      .uri("/api/v1/users/register")
      .set_json(json!({
        "username": "newuser",
        "email": "new@example.com",
        "password": "securepassword",
      }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(
      resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("application/json")
    );
    assert!(resp.headers().contains_key("x-request-id"));

    let body: StatusResponse = test::read_body_json(resp).await;
    assert_eq!(body.success.as_deref(), Some("User created"));

    let stored = gateway.find("newuser").unwrap();
    assert_eq!(stored.email, "new@example.com");
    assert_eq!(stored.salt.len(), 16);
    assert_eq!(stored.password_hash.len(), 32);
    assert_ne!(stored.password_hash, b"securepassword".to_vec());
  }

  #[actix_web::test]
  async fn test_register_duplicate_returns_conflict() {
    let gateway = Arc::new(InMemoryUserGateway::new());
    let app = init_app!(gateway.clone());

    for (email, expected) in [
      ("original@example.com", StatusCode::CREATED),
      ("second@example.com", StatusCode::CONFLICT),
    ] {
      let req = test::TestRequest::post()
        .uri("/api/v1/users/register")
        .set_json(json!({
          "username": "dupuser",
          "email": email,
          "password": "securepassword",
        }))
        .to_request();
      let resp = test::call_service(&app, req).await;
      assert_eq!(resp.status(), expected);

      if expected == StatusCode::CONFLICT {
        let body: StatusResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.as_deref(), Some("Username already exists"));
      }
    }

    assert_eq!(gateway.len(), 1);
    assert_eq!(
      gateway.find("dupuser").unwrap().email,
      "original@example.com"
    );
  }

  #[actix_web::test]
  async fn test_register_malformed_json_returns_bad_request() {
    let gateway = Arc::new(InMemoryUserGateway::new());
    let app = init_app!(gateway.clone());

    let req = test::TestRequest::post()
      .uri("/api/v1/users/register")
      .insert_header(("content-type", "application/json"))
      .set_payload("{not json")
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert_eq!(body.error.as_deref(), Some("Invalid request"));
    assert!(gateway.is_empty());
  }

  #[actix_web::test]
  async fn test_register_missing_field_returns_bad_request() {
    let gateway = Arc::new(InMemoryUserGateway::new());
    let app = init_app!(gateway.clone());

    let req = test::TestRequest::post()
      .uri("/api/v1/users/register")
      .set_json(json!({ "username": "nomail", "password": "pw" }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(gateway.is_empty());
  }

  #[actix_web::test]
  async fn test_register_control_character_username_returns_bad_request() {
    let gateway = Arc::new(InMemoryUserGateway::new());
    let app = init_app!(gateway.clone());

    let req = test::TestRequest::post()
      .uri("/api/v1/users/register")
      .set_json(json!({
        "username": "nul\u{0}name",
        "email": "nul@x.com",
        "password": "securepassword",
      }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert_eq!(body.error.as_deref(), Some("Invalid request"));
    assert!(gateway.is_empty());
  }

  #[actix_web::test]
  async fn test_register_storage_failure_returns_generic_error() {
    let gateway = Arc::new(InMemoryUserGateway::new());
    gateway.set_unavailable(true);
    let app = init_app!(gateway.clone());

    let req = test::TestRequest::post()
      .uri("/api/v1/users/register")
      .set_json(json!({
        "username": "alice",
        "email": "alice@x.com",
        "password": "pw1",
      }))
      .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert_eq!(body, StatusResponse::error("Unexpected error"));
    assert!(gateway.is_empty());
  }

  #[actix_web::test]
  async fn test_unimplemented_routes() {
    let gateway = Arc::new(InMemoryUserGateway::new());
    let app = init_app!(gateway);

    let requests = [
      test::TestRequest::post().uri("/api/v1/users/login"),
      test::TestRequest::post().uri("/api/v1/users/logout"),
      test::TestRequest::post().uri("/api/v1/users/refresh"),
      test::TestRequest::put().uri("/api/v1/users/alice"),
      test::TestRequest::delete().uri("/api/v1/users/alice"),
    ];

    for req in requests {
      let resp = test::call_service(&app, req.to_request()).await;
      assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    }
  }
}
