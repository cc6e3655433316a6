pub mod context;
pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use context::RequestContext;
pub use entities::User;
pub use errors::{AuthError, HashError, RepositoryError, ValidationError};
pub use ports::{PasswordHasher, UserGateway};
pub use services::UserService;
pub use value_objects::{
  Email, HashingParams, Password, PasswordHash, PasswordPolicy, Salt, Username,
};
