//! Blog posts and interaction statistics

pub mod service;

pub use service::BlogService;
