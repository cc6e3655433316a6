//! Application layer
//!
//! Use cases that sit between the HTTP adapter and the domain: they validate
//! raw input into value objects and call the domain services.

pub mod auth;
