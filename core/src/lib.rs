//! # Core domain layer
//!
//! Business logic for the Blogsyte backend: domain entities, the domain
//! error taxonomy, repository traits (with in-memory mocks for tests) and
//! the services built on top of them: OTP signup verification, login,
//! blog statistics and admin operations.
//!
//! Nothing in this crate talks to Postgres or SMTP directly; the
//! infrastructure layer provides implementations of the traits defined
//! here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
