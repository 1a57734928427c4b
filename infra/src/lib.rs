//! # Infrastructure layer
//!
//! Concrete implementations of the core traits: PostgreSQL persistence
//! via sqlx (connection pool, idempotent schema bootstrap, repository
//! implementations) and SMTP email delivery via lettre, plus a capturing
//! mock mailer for tests.

pub mod database;
pub mod email;
