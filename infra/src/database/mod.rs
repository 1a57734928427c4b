//! PostgreSQL persistence

pub mod connection;
pub mod postgres;
pub mod schema;

pub use connection::create_pool;
pub use postgres::{PostgresBlogRepository, PostgresUserRepository};
