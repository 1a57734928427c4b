//! Response construction helpers

pub mod error_handler;

pub use error_handler::{bad_request, domain_error_response, domain_error_response_or};
