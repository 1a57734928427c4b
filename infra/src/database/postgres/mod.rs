//! sqlx-backed repository implementations

mod blog_repository_impl;
mod user_repository_impl;

pub use blog_repository_impl::PostgresBlogRepository;
pub use user_repository_impl::PostgresUserRepository;

use bs_core::errors::DomainError;

/// Postgres SQLSTATE for unique constraint violations
pub(crate) const UNIQUE_VIOLATION: &str = "23505";

/// Map a sqlx error to the domain database error
pub(crate) fn db_error(context: &str, error: sqlx::Error) -> DomainError {
    DomainError::Database {
        message: format!("{}: {}", context, error),
    }
}
