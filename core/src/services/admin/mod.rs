//! Admin panel operations

pub mod service;

pub use service::{AdminService, PlatformStats, UserSummary};
