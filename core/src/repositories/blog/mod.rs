//! Blog persistence contract and mock

mod mock;
mod repository;

pub use mock::MockBlogRepository;
pub use repository::BlogRepository;
