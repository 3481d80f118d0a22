//! Driving port for user reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for fetching users.
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch a user by identifier.
    ///
    /// Absence is a valid outcome, not an error, so the port returns
    /// `Ok(None)` when no record matches.
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
