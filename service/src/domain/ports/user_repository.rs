//! Port abstraction for user persistence adapters and their errors.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Driven port over the user store.
///
/// Records arrive already carrying their identity; the store is only asked
/// to keep, return, or forget them.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user record.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier; `None` when no such record exists.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Remove the record if present; absence is not an error.
    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserPersistenceError>;
}

/// In-memory user repository for tests and pool-less deployments.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<T>(
        &self,
        op: impl FnOnce(&mut HashMap<Uuid, User>) -> T,
    ) -> Result<T, UserPersistenceError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))?;
        Ok(op(&mut guard))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        self.with_state(|users| {
            users.insert(*user.id().as_uuid(), user.clone());
        })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        self.with_state(|users| users.get(id.as_uuid()).cloned())
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        self.with_state(|users| {
            users.remove(id.as_uuid());
        })
    }
}
