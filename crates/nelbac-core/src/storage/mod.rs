pub mod chat_repo;
pub mod database;

pub use chat_repo::ChatRepository;
pub use database::Database;
