//! # Shared module
//!
//! Cross-cutting pieces used by every layer of the Blogsyte backend:
//! environment-driven configuration, the JSON response envelope and
//! input validation helpers.

pub mod config;
pub mod types;
pub mod utils;
