pub mod user_gateway;

pub use user_gateway::PostgresUserGateway;
