//! Admin routes

mod stats;
mod users;

pub use stats::platform_stats;
pub use users::{ban_user, delete_user, list_users, unban_user};
