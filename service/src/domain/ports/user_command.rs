//! Driving port for user mutations.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! create and delete users without knowing (or importing) the backing
//! infrastructure, which keeps HTTP handler tests deterministic.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

/// Domain use-case port for creating and deleting users.
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Persist a new user from a validated draft and return the stored record.
    async fn create_user(&self, draft: NewUser) -> Result<User, Error>;

    /// Delete the user with the given identifier.
    ///
    /// No distinction is surfaced between "deleted" and "did not exist".
    async fn delete_user(&self, id: &UserId) -> Result<(), Error>;
}
