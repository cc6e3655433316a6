//! User registration use cases
//!
//! Turns raw request input into validated value objects and hands them to
//! the domain user service.

mod register_user;

pub use register_user::{RegisterUserCommand, RegisterUserUseCase};
