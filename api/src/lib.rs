//! # HTTP layer
//!
//! actix-web application for the Blogsyte backend: DTOs, route handlers,
//! the domain-error to HTTP-status mapping and the app factory. The
//! factory is generic over the repository and mailer traits so the
//! integration tests can run the full application against in-memory
//! implementations.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
