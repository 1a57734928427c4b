//! Blog routes: posts, interactions, dashboard

mod dashboard;
mod interactions;
mod posts;

pub use dashboard::dashboard;
pub use interactions::{add_comment, list_comments, record_view, toggle_like};
pub use posts::{create_post, delete_post, get_post, list_posts};
