pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryUserGateway;
pub use postgres::PostgresUserGateway;
