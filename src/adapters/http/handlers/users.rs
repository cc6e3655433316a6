use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::adapters::http::{
  dtos::{RegisterRequest, StatusResponse, USER_CREATED},
  errors::ApiError,
  middleware::RequestIdExt,
};
use crate::application::auth::{RegisterUserCommand, RegisterUserUseCase};
use crate::domain::auth::context::RequestContext;

/// Per-request deadline for storage work, stored in app data
#[derive(Debug, Clone, Copy)]
pub struct RequestTimeout(pub Duration);

/// Builds the request context the core runs under
fn request_context(req: &HttpRequest, timeout: Duration) -> RequestContext {
  let ctx = RequestContext::with_timeout(timeout);
  match req.request_id() {
    Some(id) => ctx.request_id(id.value()),
    None => ctx,
  }
}

/// Handler for user registration
///
/// POST /api/v1/users/register
/// Body: RegisterRequest (JSON)
/// Response: StatusResponse (JSON) with status 201
pub async fn register_handler(
  http_req: HttpRequest,
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
  timeout: web::Data<RequestTimeout>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let ctx = request_context(&http_req, timeout.0);

  let RegisterRequest {
    username,
    email,
    password,
  } = request.into_inner();

  use_case
    .execute(
      &ctx,
      RegisterUserCommand {
        username,
        email,
        password,
      },
    )
    .await?;

  Ok(HttpResponse::Created().json(StatusResponse::success(USER_CREATED)))
}

/// Placeholder for login, logout, token refresh, update and delete
pub async fn not_implemented_handler() -> Result<HttpResponse, ApiError> {
  Err(ApiError::NotImplemented)
}

/// Turns extractor failures (bad JSON, wrong content type) into the JSON envelope
pub fn json_error_handler(
  err: actix_web::error::JsonPayloadError,
  _req: &HttpRequest,
) -> actix_web::Error {
  ApiError::Validation(err.to_string()).into()
}
