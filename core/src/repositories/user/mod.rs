//! User persistence contract and mock

mod mock;
mod repository;

pub use mock::MockUserRepository;
pub use repository::UserRepository;
