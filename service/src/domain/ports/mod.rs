//! Domain ports and supporting types for the hexagonal boundary.

mod user_command;
mod user_query;
mod user_repository;

pub use user_command::UserCommand;
pub use user_query::UserQuery;
pub use user_repository::{InMemoryUserRepository, UserPersistenceError, UserRepository};
