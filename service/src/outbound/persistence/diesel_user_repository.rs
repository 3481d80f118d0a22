//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A thin adapter: it only translates between Diesel row structs and the
//! domain record, and maps database failures to the port's error type. No
//! business logic resides here.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, Password, User, UserId, UserName};

use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to the port's persistence errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to the port's persistence errors.
fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => UserPersistenceError::query("database error"),
        _ => UserPersistenceError::query("database error"),
    }
}

/// Convert a database row to the domain record.
///
/// Stored rows are expected to satisfy the domain invariants; a row that
/// no longer does is surfaced as a query error rather than a panic.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        password,
    } = row;

    let name = UserName::new(name);
    let email = EmailAddress::new(email);
    let password = Password::new(password);

    match (name, email, password) {
        (Ok(name), Ok(email), Ok(password)) => {
            Ok(User::new(UserId::from_uuid(id), name, email, password))
        }
        (name, email, password) => {
            warn!(
                user_id = %id,
                name_ok = name.is_ok(),
                email_ok = email.is_ok(),
                password_ok = password.is_ok(),
                "stored user row violates domain invariants"
            );
            Err(UserPersistenceError::query("stored user record is invalid"))
        }
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            email: user.email().as_ref(),
            password: user.password().as_str(),
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result: Option<UserRow> = users::table
            .filter(users::id.eq(id.as_uuid()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        result.map(row_to_user).transpose()
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Zero affected rows means the record was already absent, which the
        // port treats as success.
        diesel::delete(users::table.filter(users::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
