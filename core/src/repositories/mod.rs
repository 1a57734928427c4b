//! Repository traits and test doubles
//!
//! The traits define the persistence contract consumed by the services;
//! the infrastructure layer supplies the Postgres implementations, and the
//! in-memory mocks back the service and API tests.

pub mod blog;
pub mod user;

pub use blog::{BlogRepository, MockBlogRepository};
pub use user::{MockUserRepository, UserRepository};
