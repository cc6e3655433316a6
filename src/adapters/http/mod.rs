pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{RegisterRequest, StatusResponse};
pub use errors::ApiError;
pub use handlers::users::{not_implemented_handler, register_handler};
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::configure_user_routes;
