//! Apollo user management service
//!
//! Layered as domain (entities, ports, user service), application (use
//! cases), infrastructure (Argon2id hasher, PostgreSQL gateway, config) and
//! adapters (actix-web HTTP API).

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
