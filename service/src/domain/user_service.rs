//! User domain services.
//!
//! These services implement the user driving ports over the repository
//! port. Each call is a single independent request/response; the services
//! own no state beyond the repository handle.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    UserCommand, UserPersistenceError, UserQuery, UserRepository,
};
use crate::domain::{Error, NewUser, User, UserId};

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

/// User service implementing the command driving port.
#[derive(Clone)]
pub struct UserCommandService<R> {
    user_repo: Arc<R>,
}

impl<R> UserCommandService<R> {
    /// Create a new command service with the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserCommand for UserCommandService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: NewUser) -> Result<User, Error> {
        let user = User::create(draft);

        self.user_repo
            .insert(&user)
            .await
            .map_err(map_repository_error)?;

        Ok(user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), Error> {
        self.user_repo
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

/// User service implementing the query driving port.
#[derive(Clone)]
pub struct UserQueryService<R> {
    user_repo: Arc<R>,
}

impl<R> UserQueryService<R> {
    /// Create a new query service with the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserQuery for UserQueryService<R>
where
    R: UserRepository,
{
    async fn get_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
