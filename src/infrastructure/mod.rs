//! Infrastructure layer
//!
//! Concrete implementations of the domain ports: Argon2id hashing, the
//! PostgreSQL gateway and configuration loading.

pub mod config;
pub mod persistence;
pub mod security;
