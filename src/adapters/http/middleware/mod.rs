pub mod request_id;

// Re-export middleware components for easier access
pub use request_id::{RequestId, RequestIdExt, RequestIdMiddleware};
